use std::ffi::CString;
use std::fmt;
use std::ptr;

use gl::types::{GLenum, GLint, GLuint};

use crate::error::RenderError;

/// A pipeline stage kind.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    fn gl_kind(self) -> GLenum {
        match self {
            ShaderStage::Vertex => gl::VERTEX_SHADER,
            ShaderStage::Fragment => gl::FRAGMENT_SHADER,
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => write!(f, "vertex"),
            ShaderStage::Fragment => write!(f, "fragment"),
        }
    }
}

/// A linked, drawable shader program.
///
/// Construction is all-or-nothing: a `ShaderProgram` only exists once both
/// stages compiled and the link reported success, so a draw call can never
/// reference a half-built pipeline.
pub struct ShaderProgram {
    id: GLuint,
}

impl ShaderProgram {
    /// Compiles both stages and links them into a program.
    ///
    /// The intermediate per-stage shader objects are deleted after the link
    /// attempt on every path, success or failure.
    pub fn build(vertex_src: &str, fragment_src: &str) -> Result<Self, RenderError> {
        let vs = compile_stage(ShaderStage::Vertex, vertex_src)?;
        let fs = match compile_stage(ShaderStage::Fragment, fragment_src) {
            Ok(fs) => fs,
            Err(e) => {
                unsafe { gl::DeleteShader(vs) };
                return Err(e);
            }
        };

        let id = link_program(vs, fs)?;

        log::debug!("shader program {id} linked");
        Ok(Self { id })
    }

    /// Binds the program for subsequent draw calls.
    pub fn bind(&self) {
        unsafe { gl::UseProgram(self.id) };
    }

    pub fn id(&self) -> GLuint {
        self.id
    }
}

impl Drop for ShaderProgram {
    fn drop(&mut self) {
        unsafe { gl::DeleteProgram(self.id) };
    }
}

fn compile_stage(stage: ShaderStage, source: &str) -> Result<GLuint, RenderError> {
    // Interior NULs cannot survive the FFI boundary; strip rather than fail,
    // the driver will report any genuine syntax problem.
    let c_source = CString::new(source.replace('\0', "")).expect("NULs stripped");

    unsafe {
        let shader = gl::CreateShader(stage.gl_kind());
        gl::ShaderSource(shader, 1, &c_source.as_ptr(), ptr::null());
        gl::CompileShader(shader);

        let mut status: GLint = 0;
        gl::GetShaderiv(shader, gl::COMPILE_STATUS, &mut status);
        if status == 0 {
            let log = shader_info_log(shader);
            gl::DeleteShader(shader);
            return Err(RenderError::ShaderCompile { stage, log });
        }

        Ok(shader)
    }
}

fn link_program(vs: GLuint, fs: GLuint) -> Result<GLuint, RenderError> {
    unsafe {
        let program = gl::CreateProgram();
        gl::AttachShader(program, vs);
        gl::AttachShader(program, fs);
        gl::LinkProgram(program);

        // The stage objects are no longer needed once the link attempt has
        // been made, whatever its outcome.
        gl::DeleteShader(vs);
        gl::DeleteShader(fs);

        let mut status: GLint = 0;
        gl::GetProgramiv(program, gl::LINK_STATUS, &mut status);
        if status == 0 {
            let log = program_info_log(program);
            gl::DeleteProgram(program);
            return Err(RenderError::ProgramLink { log });
        }

        Ok(program)
    }
}

/// Retrieves a shader info log sized to the driver-reported length.
unsafe fn shader_info_log(shader: GLuint) -> String {
    unsafe {
        let mut len: GLint = 0;
        gl::GetShaderiv(shader, gl::INFO_LOG_LENGTH, &mut len);
        if len <= 0 {
            return String::new();
        }

        let mut buf = vec![0u8; len as usize];
        gl::GetShaderInfoLog(shader, len, ptr::null_mut(), buf.as_mut_ptr().cast());
        string_from_log(buf)
    }
}

unsafe fn program_info_log(program: GLuint) -> String {
    unsafe {
        let mut len: GLint = 0;
        gl::GetProgramiv(program, gl::INFO_LOG_LENGTH, &mut len);
        if len <= 0 {
            return String::new();
        }

        let mut buf = vec![0u8; len as usize];
        gl::GetProgramInfoLog(program, len, ptr::null_mut(), buf.as_mut_ptr().cast());
        string_from_log(buf)
    }
}

fn string_from_log(mut buf: Vec<u8>) -> String {
    // The reported length includes the trailing NUL.
    if let Some(nul) = buf.iter().position(|&b| b == 0) {
        buf.truncate(nul);
    }
    String::from_utf8_lossy(&buf).trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_buffer_stops_at_the_nul() {
        let raw = b"0:1(1): error: syntax error\0\0\0".to_vec();
        assert_eq!(string_from_log(raw), "0:1(1): error: syntax error");
    }

    #[test]
    fn log_buffer_trims_trailing_whitespace() {
        let raw = b"warning: unused varying\n\0".to_vec();
        assert_eq!(string_from_log(raw), "warning: unused varying");
    }

    #[test]
    fn stage_display_names() {
        assert_eq!(ShaderStage::Vertex.to_string(), "vertex");
        assert_eq!(ShaderStage::Fragment.to_string(), "fragment");
    }
}
