//! Output writer for C++ source text.
//!
//! The writer tracks indentation so that emitters describe structure
//! (open a namespace, write a line, close a block) and the writer decides
//! the whitespace. Indentation is two spaces per level. Blank lines never
//! carry trailing whitespace.

/// The author line written into every banner.
const AUTHOR: &str = "Generated by fpp-to-cpp";

const RULE_BANNER: &str = "// ======================================================================";
const RULE_SECTION: &str = "// ----------------------------------------------------------------------";

const COPYRIGHT: &[&str] = &[
    "// \\copyright",
    "// Copyright (C) 2020 California Institute of Technology.",
    "// ALL RIGHTS RESERVED.  United States Government Sponsorship",
    "// acknowledged. Any commercial use must be negotiated with the Office",
    "// of Technology Transfer at the California Institute of Technology.",
    "// ",
    "// This software may be subject to U.S. export control laws and",
    "// regulations.  By accepting this document, the user agrees to comply",
    "// with all U.S. export laws and regulations.  User has the",
    "// responsibility to obtain export licenses, or other export authority",
    "// as may be required before exporting such information to foreign",
    "// countries or providing access to foreign persons.",
];

pub(crate) struct CppWriter {
    buffer: String,
    indents: usize,
}

impl CppWriter {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            indents: 0,
        }
    }

    /// Writes one line at the current indentation.
    pub fn line(&mut self, text: &str) {
        if !text.is_empty() {
            for _ in 0..self.indents {
                self.buffer.push_str("  ");
            }
            self.buffer.push_str(text);
        }
        self.buffer.push('\n');
    }

    pub fn blank(&mut self) {
        self.buffer.push('\n');
    }

    /// Writes a line at column zero regardless of indentation, as used for
    /// preprocessor directives.
    pub fn directive(&mut self, text: &str) {
        self.buffer.push_str(text);
        self.buffer.push('\n');
    }

    pub fn indent(&mut self) {
        self.indents += 1;
    }

    pub fn outdent(&mut self) {
        self.indents = self.indents.saturating_sub(1);
    }

    /// Writes each line of an annotation as a `//!` comment.
    pub fn annotation(&mut self, annotation: Option<&str>) {
        if let Some(text) = annotation {
            for line in text.lines() {
                self.line(format!("//! {}", line).trim_end());
            }
        }
    }

    /// Writes the file banner followed by a blank line.
    pub fn banner(&mut self, file_name: &str, brief: &str) {
        self.directive(RULE_BANNER);
        self.directive(&format!("// \\title  {}", file_name));
        self.directive(&format!("// \\author {}", AUTHOR));
        self.directive(&format!("// \\brief  {}", brief));
        self.directive(RULE_BANNER);
        self.blank();
    }

    /// Writes the file banner that carries the copyright notice followed by
    /// a blank line.
    pub fn banner_with_copyright(&mut self, file_name: &str) {
        self.directive(&format!("{} ", RULE_BANNER));
        self.directive(&format!("// \\title  {}", file_name));
        self.directive(&format!("// \\author {}", AUTHOR));
        self.directive("//");
        for line in COPYRIGHT {
            self.directive(line);
        }
        self.directive(RULE_BANNER);
        self.blank();
    }

    /// Writes a section heading followed by a blank line.
    pub fn section(&mut self, title: &str) {
        self.line(RULE_SECTION);
        self.line(&format!("// {}", title));
        self.line(RULE_SECTION);
        self.blank();
    }

    /// Opens one namespace per module, each followed by a blank line.
    pub fn open_namespaces(&mut self, modules: &[String]) {
        for module in modules {
            self.line(&format!("namespace {} {{", module));
            self.blank();
            self.indent();
        }
    }

    /// Closes the namespaces opened by `open_namespaces`.
    pub fn close_namespaces(&mut self, modules: &[String]) {
        for idx in (0..modules.len()).rev() {
            self.outdent();
            self.line("}");
            if idx > 0 {
                self.blank();
            }
        }
    }

    /// Writes an include guard opening followed by a blank line.
    pub fn open_guard(&mut self, guard: &str) {
        self.directive(&format!("#ifndef {}", guard));
        self.directive(&format!("#define {}", guard));
        self.blank();
    }

    pub fn includes(&mut self, files: &[&str]) {
        for file in files {
            self.directive(&format!("#include {}", file));
        }
        self.blank();
    }

    pub fn finish(self) -> String {
        self.buffer
    }
}
