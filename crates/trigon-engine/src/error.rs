use std::fmt;

use crate::render::ShaderStage;

/// Failure raised during bootstrap or pipeline construction.
///
/// Every variant is terminal for the operation that raised it; there is no
/// retry path. Startup failures (`ContextCreationFailed`, `FunctionLoadFailed`,
/// `VideoModeUnavailable`) abort before any GL object exists. Compile/link
/// failures abort pipeline construction: a `ShaderProgram` is never handed
/// out in a half-built state.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderError {
    /// The windowing layer returned no window/context handle.
    ContextCreationFailed,

    /// GL entry points could not be resolved for the current context.
    FunctionLoadFailed,

    /// Fullscreen was requested but no primary video mode is available.
    ///
    /// Strict by design: a failed fullscreen request does not fall back
    /// to a windowed context.
    VideoModeUnavailable,

    /// A shader stage failed to compile.
    ShaderCompile {
        stage: ShaderStage,
        /// Driver info log, sized to the reported log length.
        log: String,
    },

    /// The program failed to link.
    ProgramLink { log: String },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::ContextCreationFailed => {
                write!(f, "failed to create window/GL context")
            }
            RenderError::FunctionLoadFailed => {
                write!(f, "failed to resolve GL entry points")
            }
            RenderError::VideoModeUnavailable => {
                write!(f, "no primary monitor video mode for fullscreen")
            }
            RenderError::ShaderCompile { stage, log } => {
                write!(f, "{stage} shader compilation failed: {log}")
            }
            RenderError::ProgramLink { log } => {
                write!(f, "program link failed: {log}")
            }
        }
    }
}

impl std::error::Error for RenderError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_faulty_stage() {
        let err = RenderError::ShaderCompile {
            stage: ShaderStage::Vertex,
            log: "0:1(1): error: syntax error".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("vertex"));
        assert!(msg.contains("syntax error"));

        let err = RenderError::ShaderCompile {
            stage: ShaderStage::Fragment,
            log: "bad".to_string(),
        };
        assert!(err.to_string().contains("fragment"));
    }

    #[test]
    fn every_variant_has_a_message() {
        let variants = [
            RenderError::ContextCreationFailed,
            RenderError::FunctionLoadFailed,
            RenderError::VideoModeUnavailable,
            RenderError::ProgramLink { log: "l".to_string() },
        ];
        for v in variants {
            assert!(!v.to_string().is_empty());
        }
    }
}
