// shader.rs - vertex/fragment program loading and uniform setters

use crate::utils::error::ShaderError;
use gl::types::*;
use glam::Mat4;
use std::ffi::CString;
use std::fs;
use std::path::Path;
use std::ptr;

/// Driver-reported outcome of each build step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShaderStatus {
    pub vertex_compiled: bool,
    pub fragment_compiled: bool,
    pub linked: bool,
}

/// A linked vertex + fragment program.
///
/// Building never fails from the caller's point of view: read, compile and
/// link errors are logged and the program handle is kept regardless. Check
/// [`Shader::status`] to see what the driver accepted.
pub struct Shader {
    id: GLuint,
    status: ShaderStatus,
}

impl Shader {
    pub fn new(vertex_path: impl AsRef<Path>, fragment_path: impl AsRef<Path>) -> Self {
        let (vertex_source, fragment_source) =
            load_sources(vertex_path.as_ref(), fragment_path.as_ref());
        Self::from_source(&vertex_source, &fragment_source)
    }

    pub fn from_source(vertex_source: &str, fragment_source: &str) -> Self {
        let mut status = ShaderStatus::default();

        let vertex = compile_stage(vertex_source, gl::VERTEX_SHADER, "vertex");
        status.vertex_compiled = log_failure(vertex.result);

        let fragment = compile_stage(fragment_source, gl::FRAGMENT_SHADER, "fragment");
        status.fragment_compiled = log_failure(fragment.result);

        let id = unsafe { gl::CreateProgram() };
        unsafe {
            gl::AttachShader(id, vertex.id);
            gl::AttachShader(id, fragment.id);
            gl::LinkProgram(id);
        }
        status.linked = log_failure(check_link_status(id));

        // Stages live on inside the program once linked.
        unsafe {
            gl::DeleteShader(vertex.id);
            gl::DeleteShader(fragment.id);
        }

        if status.linked {
            log::info!("Shader program {} linked", id);
        }

        Self { id, status }
    }

    pub fn id(&self) -> GLuint {
        self.id
    }

    pub fn status(&self) -> ShaderStatus {
        self.status
    }

    pub fn is_linked(&self) -> bool {
        self.status.linked
    }

    pub fn activate(&self) {
        unsafe {
            gl::UseProgram(self.id);
        }
    }

    // Uniform setters. The location is looked up on every call; GL ignores
    // location -1, so unknown names are silently dropped.
    pub fn set_bool(&self, name: &str, value: bool) {
        let location = self.uniform_location(name);
        unsafe {
            gl::Uniform1i(location, value as GLint);
        }
    }

    pub fn set_int(&self, name: &str, value: i32) {
        let location = self.uniform_location(name);
        unsafe {
            gl::Uniform1i(location, value);
        }
    }

    pub fn set_float(&self, name: &str, value: f32) {
        let location = self.uniform_location(name);
        unsafe {
            gl::Uniform1f(location, value);
        }
    }

    pub fn set_matrix(&self, name: &str, value: &Mat4) {
        let location = self.uniform_location(name);
        let columns = value.to_cols_array();
        unsafe {
            gl::UniformMatrix4fv(location, 1, gl::FALSE, columns.as_ptr());
        }
    }

    fn uniform_location(&self, name: &str) -> GLint {
        match uniform_name(name) {
            Some(cname) => unsafe { gl::GetUniformLocation(self.id, cname.as_ptr()) },
            None => -1,
        }
    }
}

impl Drop for Shader {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteProgram(self.id);
        }
    }
}

struct CompiledStage {
    id: GLuint,
    result: Result<(), ShaderError>,
}

/// Reads both stage sources. Either one failing fails the pair.
pub fn read_sources(
    vertex_path: &Path,
    fragment_path: &Path,
) -> Result<(String, String), ShaderError> {
    Ok((read_source(vertex_path)?, read_source(fragment_path)?))
}

/// Like [`read_sources`], but a read failure is logged and both stages fall
/// back to empty source. Compilation then fails and is logged in turn.
pub fn load_sources(vertex_path: &Path, fragment_path: &Path) -> (String, String) {
    match read_sources(vertex_path, fragment_path) {
        Ok(sources) => sources,
        Err(e) => {
            log::error!("Failed to read shader files! {}", e);
            (String::new(), String::new())
        }
    }
}

fn read_source(path: &Path) -> Result<String, ShaderError> {
    fs::read_to_string(path).map_err(|source| ShaderError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Converts a uniform name for GL. Names with an interior NUL can never match
/// a GLSL identifier and are rejected with a warning.
pub fn uniform_name(name: &str) -> Option<CString> {
    match CString::new(name) {
        Ok(cname) => Some(cname),
        Err(e) => {
            log::warn!("Uniform name {:?} is not a valid identifier: {}", name, e);
            None
        }
    }
}

/// Driver info logs are NUL-terminated and often end in a newline.
pub fn info_log_to_string(buffer: &[u8]) -> String {
    let end = buffer.iter().position(|&b| b == 0).unwrap_or(buffer.len());
    String::from_utf8_lossy(&buffer[..end]).trim_end().to_string()
}

fn log_failure(result: Result<(), ShaderError>) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            log::error!("{}", e);
            false
        }
    }
}

fn compile_stage(source: &str, stage_type: GLenum, stage: &'static str) -> CompiledStage {
    let id = unsafe { gl::CreateShader(stage_type) };

    let result = match CString::new(source.as_bytes()) {
        Ok(c_source) => {
            unsafe {
                gl::ShaderSource(id, 1, &c_source.as_ptr(), ptr::null());
                gl::CompileShader(id);
            }
            check_compile_status(id, stage)
        }
        Err(e) => Err(ShaderError::from(e)),
    };

    CompiledStage { id, result }
}

fn check_compile_status(shader: GLuint, stage: &'static str) -> Result<(), ShaderError> {
    let mut success = 0;
    unsafe {
        gl::GetShaderiv(shader, gl::COMPILE_STATUS, &mut success);
    }
    if success != 0 {
        return Ok(());
    }

    let mut len = 0;
    unsafe {
        gl::GetShaderiv(shader, gl::INFO_LOG_LENGTH, &mut len);
    }
    let mut buffer = vec![0u8; len.max(1) as usize];
    unsafe {
        gl::GetShaderInfoLog(
            shader,
            buffer.len() as GLsizei,
            ptr::null_mut(),
            buffer.as_mut_ptr() as *mut GLchar,
        );
    }

    Err(ShaderError::Compilation {
        stage,
        log: info_log_to_string(&buffer),
    })
}

fn check_link_status(program: GLuint) -> Result<(), ShaderError> {
    let mut success = 0;
    unsafe {
        gl::GetProgramiv(program, gl::LINK_STATUS, &mut success);
    }
    if success != 0 {
        return Ok(());
    }

    let mut len = 0;
    unsafe {
        gl::GetProgramiv(program, gl::INFO_LOG_LENGTH, &mut len);
    }
    let mut buffer = vec![0u8; len.max(1) as usize];
    unsafe {
        gl::GetProgramInfoLog(
            program,
            buffer.len() as GLsizei,
            ptr::null_mut(),
            buffer.as_mut_ptr() as *mut GLchar,
        );
    }

    Err(ShaderError::Linking(info_log_to_string(&buffer)))
}
