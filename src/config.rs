//! Output configuration for rendering field elements and matrices

use crate::field::{Field, Field256Element};
use crate::matrix::{LatexOptions, Matrix};

/// How GF(2^8) bytes are written out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ByteFormat {
    /// Two lowercase hex digits, e.g. `0d`
    #[default]
    Hex,
    /// Plain decimal, e.g. `13`
    Decimal,
}

impl ByteFormat {
    pub fn format(&self, x: &Field256Element) -> String {
        match self {
            ByteFormat::Hex => format!("{:02x}", x),
            ByteFormat::Decimal => x.to_string(),
        }
    }
}

impl std::str::FromStr for ByteFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hex" => Ok(ByteFormat::Hex),
            "dec" | "decimal" => Ok(ByteFormat::Decimal),
            other => Err(format!("unknown byte format: {}", other)),
        }
    }
}

/// Rendering options shared by the command-line tools
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    pub byte_format: ByteFormat,
    /// Emit matrices as LaTeX instead of plain text
    pub latex: bool,
}

impl OutputConfig {
    pub fn new(byte_format: ByteFormat, latex: bool) -> Self {
        Self { byte_format, latex }
    }

    /// Read `--format` and `--latex`; subcommands without `--format` use hex
    pub fn from_args(matches: &clap::ArgMatches) -> Self {
        let byte_format = matches
            .try_get_one::<String>("format")
            .ok()
            .flatten()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default();

        let latex = matches.get_flag("latex");

        Self::new(byte_format, latex)
    }

    /// Render a list of bytes, comma separated
    pub fn format_bytes(&self, bytes: &[Field256Element]) -> String {
        bytes
            .iter()
            .map(|x| self.byte_format.format(x))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// LaTeX options rendering GF(2^8) cells in the configured byte format
    pub fn byte_latex_options(
        &self,
        environment: &'static str,
    ) -> LatexOptions<'static, Field256Element> {
        let byte_format = self.byte_format;
        LatexOptions::new(environment)
            .with_formatter(move |x, _, _| format!("\\mathtt{{{}}}", byte_format.format(x)))
    }

    /// Plain or LaTeX rendering of any matrix, with `Display` cells
    pub fn render_matrix<T: Field>(&self, m: &Matrix<T>) -> String {
        if self.latex {
            m.to_latex_string(&LatexOptions::default())
        } else {
            m.to_string()
        }
    }
}
