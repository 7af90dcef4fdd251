use valctx_core::BuildInfo;

use super::output::{Output, Report};

const ABOUT: &str =
    "Valctx is a tool to generate convenient setters and getters for context values.";

#[derive(Debug)]
pub struct VersionReport {
    pub info: BuildInfo,
}

impl Report for VersionReport {
    fn render(&self, out: &mut dyn Output) {
        out.preformatted(ABOUT);
        out.preformatted(&self.info.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::BufferOutput;

    #[test]
    fn test_render() {
        let mut out = BufferOutput::default();
        VersionReport {
            info: BuildInfo::new("0.3.0", "abc123", "2025-01-01"),
        }
        .render(&mut out);

        assert_eq!(
            out.0,
            "Valctx is a tool to generate convenient setters and getters for context values.\n\
             Version:     0.3.0\n\
             Build Date:  2025-01-01\n\
             Commit Hash: abc123\n"
        );
    }
}
