//! Process CPU time for provenance comments.

use std::time::{Duration, Instant};

/// CPU time consumed by this process so far.
///
/// On unix this is user plus system time from `getrusage`. Elsewhere the
/// wall-clock time since `started` is used instead.
pub fn process_cpu_time(started: Instant) -> Duration {
    #[cfg(unix)]
    if let Some(cpu) = rusage_cpu_time() {
        return cpu;
    }

    started.elapsed()
}

#[cfg(unix)]
#[allow(unsafe_code, clippy::cast_sign_loss)]
fn rusage_cpu_time() -> Option<Duration> {
    let mut usage = std::mem::MaybeUninit::<libc::rusage>::zeroed();
    // SAFETY: getrusage only writes into the provided struct, which is
    // zero-initialised and large enough for `libc::rusage`.
    let rc = unsafe { libc::getrusage(libc::RUSAGE_SELF, usage.as_mut_ptr()) };
    if rc != 0 {
        return None;
    }
    // SAFETY: rc == 0 means the kernel filled the struct.
    let usage = unsafe { usage.assume_init() };

    let to_duration = |tv: libc::timeval| {
        Duration::from_secs(tv.tv_sec.max(0) as u64)
            + Duration::from_micros(tv.tv_usec.max(0) as u64)
    };
    Some(to_duration(usage.ru_utime) + to_duration(usage.ru_stime))
}
