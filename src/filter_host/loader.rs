// Lets NameForge host filter packs built as dynamic libraries.
// Loads platform libraries at runtime: .so (Linux), .dylib (macOS), .dll (Windows).

use std::ffi::c_void;
use std::fs;
use std::path::Path;

use libloading::{Library, Symbol};

use super::{FilterRegistrar, NameFilter};

pub const FILTER_ABI_VERSION: u32 = 1;

/// Opaque handle representing a boxed filter instance.
#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct FilterHandle {
    pub data: *mut c_void,
    pub vtable: *mut c_void,
}

impl FilterHandle {
    pub fn from_filter(filter: Box<dyn NameFilter>) -> Self {
        let raw: *mut dyn NameFilter = Box::into_raw(filter);
        let parts: [*mut c_void; 2] = unsafe { std::mem::transmute(raw) };
        Self {
            data: parts[0],
            vtable: parts[1],
        }
    }

    /// # Safety
    /// Caller must ensure the handle originated from `from_filter` in the same process.
    pub unsafe fn into_filter(self) -> Box<dyn NameFilter> {
        let parts = [self.data, self.vtable];
        let raw: *mut dyn NameFilter = std::mem::transmute(parts);
        Box::from_raw(raw)
    }
}

type RegisterFiltersFn = unsafe extern "C" fn(api: *const FilterRegistrarApi);

type RegisterFilterFn = unsafe extern "C" fn(ctx: *mut c_void, filter: FilterHandle);

#[repr(C)]
pub struct FilterRegistrarApi {
    abi_version: u32,
    host_context: *mut c_void,
    register_fn: Option<RegisterFilterFn>,
    reserved: [usize; 4],
}

impl FilterRegistrarApi {
    pub fn abi_version(&self) -> u32 {
        self.abi_version
    }

    pub fn register_filter(&self, filter: Box<dyn NameFilter>) -> Result<(), FilterApiError> {
        if self.abi_version != FILTER_ABI_VERSION {
            return Err(FilterApiError::VersionMismatch {
                expected: FILTER_ABI_VERSION,
                received: self.abi_version,
            });
        }
        let handler = self.register_fn.ok_or(FilterApiError::MissingHandler)?;
        if self.host_context.is_null() {
            return Err(FilterApiError::NullContext);
        }
        let ctx = self.host_context;
        let handle = FilterHandle::from_filter(filter);
        unsafe {
            handler(ctx, handle);
        }
        Ok(())
    }

    /// # Safety
    /// The caller must ensure that `ptr` points to a valid `FilterRegistrarApi` instance
    /// with the expected ABI layout. Passing an invalid or dangling pointer is undefined behavior.
    pub unsafe fn from_raw<'a>(
        ptr: *const FilterRegistrarApi,
    ) -> Result<&'a FilterRegistrarApi, FilterApiError> {
        ptr.as_ref().ok_or(FilterApiError::NullApi)
    }

    fn for_host(handle: &mut FilterRegistrarHandle) -> Self {
        Self {
            abi_version: FILTER_ABI_VERSION,
            host_context: handle as *mut _ as *mut c_void,
            register_fn: Some(register_filter_thunk),
            reserved: [0; 4],
        }
    }
}

#[derive(Debug)]
pub enum FilterApiError {
    NullApi,
    VersionMismatch { expected: u32, received: u32 },
    MissingHandler,
    NullContext,
}

impl std::fmt::Display for FilterApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FilterApiError::NullApi => write!(f, "filter registrar API pointer was null"),
            FilterApiError::VersionMismatch { expected, received } => write!(
                f,
                "filter ABI version mismatch (expected {}, received {})",
                expected, received
            ),
            FilterApiError::MissingHandler => {
                write!(f, "host did not supply a register_filter callback")
            }
            FilterApiError::NullContext => {
                write!(f, "host context pointer missing for register_filter")
            }
        }
    }
}

impl std::error::Error for FilterApiError {}

#[repr(C)]
struct FilterRegistrarHandle {
    data: *mut c_void,
    vtable: *mut c_void,
}

impl FilterRegistrarHandle {
    fn from_registrar(registrar: &mut dyn FilterRegistrar) -> Self {
        let raw: *mut dyn FilterRegistrar = registrar as *mut dyn FilterRegistrar;
        let parts: [*mut c_void; 2] = unsafe { std::mem::transmute(raw) };
        Self {
            data: parts[0],
            vtable: parts[1],
        }
    }

    unsafe fn as_mut(&mut self) -> &mut dyn FilterRegistrar {
        let parts = [self.data, self.vtable];
        let raw: *mut dyn FilterRegistrar = std::mem::transmute(parts);
        &mut *raw
    }
}

unsafe extern "C" fn register_filter_thunk(ctx: *mut c_void, handle: FilterHandle) {
    if ctx.is_null() {
        return;
    }
    let registrar_handle = &mut *(ctx as *mut FilterRegistrarHandle);
    let registrar = unsafe { registrar_handle.as_mut() };
    let filter = unsafe { handle.into_filter() };
    registrar.register_filter(filter);
}

/// Scans a directory for dynamic libraries exporting `register_filters` and
/// hands each one a registrar API. Loaded libraries must stay alive as long
/// as their filters are reachable, so the loader owns them for the process
/// lifetime.
pub struct FilterLoader {
    loaded: Vec<Library>,
}

impl Default for FilterLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterLoader {
    pub fn new() -> Self {
        Self { loaded: Vec::new() }
    }

    /// Number of libraries currently held open.
    pub fn loaded_count(&self) -> usize {
        self.loaded.len()
    }

    fn is_dynamic_lib(path: &Path) -> bool {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) => {
                let ext = ext.to_ascii_lowercase();
                ext == "so" || ext == "dylib" || ext == "dll"
            }
            None => false,
        }
    }

    pub fn load_filters<P: AsRef<Path>>(
        &mut self,
        filter_dir: P,
        registrar: &mut dyn FilterRegistrar,
    ) -> anyhow::Result<()> {
        for entry in fs::read_dir(filter_dir)? {
            let path = entry?.path();
            if Self::is_dynamic_lib(&path) {
                unsafe {
                    let lib = Library::new(&path).map_err(|e| anyhow::anyhow!(e))?;
                    let register: Symbol<RegisterFiltersFn> = lib
                        .get(b"register_filters")
                        .map_err(|e| anyhow::anyhow!(e))?;
                    let mut handle = FilterRegistrarHandle::from_registrar(registrar);
                    let api = FilterRegistrarApi::for_host(&mut handle);
                    register(&api as *const FilterRegistrarApi);
                    println!("🔌 Loaded filter library: {}", path.display());
                    self.loaded.push(lib);
                }
            }
        }
        Ok(())
    }
}
