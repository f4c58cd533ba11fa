//! WASAPI session provider for the default output endpoint.
//!
//! Each enumeration re-acquires the whole object chain: device enumerator ->
//! default render endpoint -> session manager -> session enumerator. Nothing
//! is cached between calls; applications opening and closing would otherwise
//! leave stale handles behind.

use tracing::warn;
use windows::core::{Interface, PWSTR};
use windows::Win32::Foundation::{CloseHandle, S_OK};
use windows::Win32::Media::Audio::{
    eMultimedia, eRender, IAudioSessionControl2, IAudioSessionEnumerator, IAudioSessionManager2,
    IMMDeviceEnumerator, ISimpleAudioVolume, MMDeviceEnumerator,
};
use windows::Win32::System::Com::{
    CoCreateInstance, CoInitializeEx, CoUninitialize, CLSCTX_ALL, COINIT_MULTITHREADED,
};
use windows::Win32::System::Threading::{
    OpenProcess, QueryFullProcessImageNameW, PROCESS_NAME_WIN32,
    PROCESS_QUERY_LIMITED_INFORMATION,
};

use crate::provider::{AudioSession, ControlError, ProviderError, SessionProvider};

/// Session provider over the Windows audio session API.
pub struct WasapiProvider {
    _com: ComGuard,
}

impl WasapiProvider {
    pub fn new() -> Result<Self, ProviderError> {
        Ok(Self {
            _com: ComGuard::acquire()?,
        })
    }
}

impl SessionProvider for WasapiProvider {
    type Session = WasapiSession;

    fn sessions(&self) -> Result<Vec<WasapiSession>, ProviderError> {
        enumerate_sessions().map_err(|err| ProviderError::Enumeration(err.to_string()))
    }
}

/// Pairs every successful `CoInitializeEx` with a `CoUninitialize`.
struct ComGuard;

impl ComGuard {
    fn acquire() -> Result<Self, ProviderError> {
        unsafe { CoInitializeEx(None, COINIT_MULTITHREADED) }
            .ok()
            .map_err(|err| ProviderError::Enumeration(format!("COM initialization failed: {err}")))?;
        Ok(Self)
    }
}

impl Drop for ComGuard {
    fn drop(&mut self) {
        unsafe { CoUninitialize() };
    }
}

fn enumerate_sessions() -> windows::core::Result<Vec<WasapiSession>> {
    unsafe {
        let enumerator: IMMDeviceEnumerator =
            CoCreateInstance(&MMDeviceEnumerator, None, CLSCTX_ALL)?;
        let device = enumerator.GetDefaultAudioEndpoint(eRender, eMultimedia)?;
        let manager: IAudioSessionManager2 = device.Activate(CLSCTX_ALL, None)?;
        let list = manager.GetSessionEnumerator()?;
        let count = list.GetCount()?;

        let mut sessions = Vec::with_capacity(count as usize);
        for index in 0..count {
            match session_handle(&list, index) {
                Ok(session) => sessions.push(session),
                Err(err) => {
                    warn!(index, error = %err, "skipping unreadable audio session");
                }
            }
        }
        Ok(sessions)
    }
}

unsafe fn session_handle(
    list: &IAudioSessionEnumerator,
    index: i32,
) -> windows::core::Result<WasapiSession> {
    let control = list.GetSession(index)?;
    let details: IAudioSessionControl2 = control.cast()?;
    let volume: ISimpleAudioVolume = control.cast()?;
    let name = resolve_process_name(&details);
    Ok(WasapiSession { name, volume })
}

/// Executable name of the session's owning process, `None` for the system
/// sounds session or when the process cannot be inspected.
unsafe fn resolve_process_name(details: &IAudioSessionControl2) -> Option<String> {
    if details.IsSystemSoundsSession() == S_OK {
        return None;
    }
    let pid = details.GetProcessId().ok()?;
    if pid == 0 {
        return None;
    }
    process_image_name(pid)
}

unsafe fn process_image_name(pid: u32) -> Option<String> {
    let handle = OpenProcess(PROCESS_QUERY_LIMITED_INFORMATION, false, pid).ok()?;
    let mut buffer = [0u16; 1024];
    let mut length = buffer.len() as u32;
    let queried = QueryFullProcessImageNameW(
        handle,
        PROCESS_NAME_WIN32,
        PWSTR(buffer.as_mut_ptr()),
        &mut length,
    );
    let _ = CloseHandle(handle);
    queried.ok()?;

    let path = String::from_utf16_lossy(&buffer[..length as usize]);
    path.rsplit(['\\', '/']).next().map(str::to_string)
}

/// One live session handle; control calls go through `ISimpleAudioVolume`.
pub struct WasapiSession {
    name: Option<String>,
    volume: ISimpleAudioVolume,
}

impl AudioSession for WasapiSession {
    fn process_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn volume(&self) -> Result<f32, ControlError> {
        unsafe { self.volume.GetMasterVolume() }.map_err(control_error)
    }

    fn set_volume(&self, level: f32) -> Result<(), ControlError> {
        unsafe { self.volume.SetMasterVolume(level, std::ptr::null()) }.map_err(control_error)
    }

    fn muted(&self) -> Result<bool, ControlError> {
        unsafe { self.volume.GetMute() }
            .map(|muted| muted.as_bool())
            .map_err(control_error)
    }

    fn set_muted(&self, muted: bool) -> Result<(), ControlError> {
        unsafe { self.volume.SetMute(muted, std::ptr::null()) }.map_err(control_error)
    }
}

fn control_error(err: windows::core::Error) -> ControlError {
    ControlError::new(err.to_string())
}
