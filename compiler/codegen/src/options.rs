//! Options that select between equivalent renderings of the generated code.

/// Which raw values an enumeration accepts as valid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ValidityPolicy {
    /// Any value between the smallest and the largest declared ordinal,
    /// including values in gaps between declared ordinals.
    #[default]
    InclusiveRange,
    /// Only the declared ordinals.
    ExactMembership,
}

/// How `toString` maps an ordinal to its name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum NameLookup {
    /// A `switch` with one case per member.
    Switch,
    /// A static table of `(ordinal, name)` pairs in declaration order.
    #[default]
    Table,
}

/// Where topology component instances live.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum InstanceStorage {
    /// One file-scope object per instance.
    FileScope,
    /// Members of a `Components` struct that the caller constructs once
    /// and passes by reference to every wiring function.
    #[default]
    Registry,
}

/// Options for one code generation run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct CodegenOptions {
    pub validity: ValidityPolicy,
    pub name_lookup: NameLookup,
    pub instance_storage: InstanceStorage,
}

impl CodegenOptions {
    /// The layout of the reference generator: inclusive range validity,
    /// `switch` name lookup and file-scope instances.
    pub fn reference() -> Self {
        Self {
            validity: ValidityPolicy::InclusiveRange,
            name_lookup: NameLookup::Switch,
            instance_storage: InstanceStorage::FileScope,
        }
    }

    pub fn with_validity(mut self, validity: ValidityPolicy) -> Self {
        self.validity = validity;
        self
    }
}
