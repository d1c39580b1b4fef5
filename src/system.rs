//! System-dependent functions, or anything that this library is unable to
//! do without help from the OS.

#[cfg(any(target_os = "macos", target_os = "ios"))]
extern "C" {
    fn gettimeofday(tp: *mut libc::timeval, tzp: *mut libc::timezone) -> libc::c_int;
}

/// Returns the system’s current time, as a count of milliseconds elapsed
/// since the Unix epoch.
#[cfg(any(target_os = "macos", target_os = "ios"))]
pub(crate) fn sys_time_ms() -> i64 {
    use std::ptr::null_mut;

    let mut tv = libc::timeval { tv_sec: 0, tv_usec: 0 };
    let _ = unsafe { gettimeofday(&mut tv, null_mut()) };
    tv.tv_sec as i64 * 1000 + (tv.tv_usec / 1000) as i64
}

/// Returns the system’s current time, as a count of milliseconds elapsed
/// since the Unix epoch.
#[cfg(all(unix, not(any(target_os = "macos", target_os = "ios"))))]
pub(crate) fn sys_time_ms() -> i64 {
    let mut ts = libc::timespec { tv_sec: 0, tv_nsec: 0 };
    let _ = unsafe { libc::clock_gettime(libc::CLOCK_REALTIME, &mut ts) };
    ts.tv_sec as i64 * 1000 + (ts.tv_nsec / 1_000_000) as i64
}

#[cfg(windows)] const HECTONANOSECS_IN_MS: i64 = 10_000;
#[cfg(windows)] const HECTONANOSEC_TO_UNIX_EPOCH: i64 = 11_644_473_600 * 1000 * HECTONANOSECS_IN_MS;

/// Returns the system’s current time, as a count of milliseconds elapsed
/// since the Unix epoch.
#[cfg(windows)]
pub(crate) fn sys_time_ms() -> i64 {
    use std::mem;
    use winapi::um::sysinfoapi::GetSystemTimeAsFileTime;

    let ft = unsafe {
        let mut ft = mem::zeroed();
        GetSystemTimeAsFileTime(&mut ft);
        ft
    };

    let hecto = ((ft.dwHighDateTime as u64) << 32 | ft.dwLowDateTime as u64) as i64;
    (hecto - HECTONANOSEC_TO_UNIX_EPOCH) / HECTONANOSECS_IN_MS
}


#[cfg(test)]
mod test {
    use super::sys_time_ms;

    #[test]
    fn sanity_check() {
        assert!(sys_time_ms() != 0);
    }
}
