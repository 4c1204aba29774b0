use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Loader logger: UEFI console, plus QEMU's debug console with the `qemu` feature.
pub struct UefiLogger;

static LOGGER: UefiLogger = UefiLogger;

impl UefiLogger {
    /// Call this once during early init.
    ///
    /// # Errors
    /// Fails if another logger was installed first.
    pub fn init(max_level: LevelFilter) -> Result<&'static Self, SetLoggerError> {
        log::set_logger(&LOGGER)?;
        log::set_max_level(max_level);
        Ok(&LOGGER)
    }
}

impl Log for UefiLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        // Format: "[LEVEL] target: message"
        debugcon::write(format_args!(
            "[{}] {}: {}\n",
            record.level(),
            record.target(),
            record.args()
        ));

        uefi::println!(
            "[{}] {}: {}",
            record.level(),
            record.target(),
            record.args()
        );
    }

    fn flush(&self) {}
}

#[cfg(all(feature = "qemu", target_arch = "x86_64"))]
mod debugcon {
    use core::fmt::{self, Write};

    /// QEMU's `-debugcon` port.
    const QEMU_DEBUG_PORT: u16 = 0x402;

    struct DebugCon;

    impl Write for DebugCon {
        fn write_str(&mut self, s: &str) -> fmt::Result {
            for b in s.bytes() {
                // SAFETY: port 0x402 is write-only and side-effect free outside QEMU.
                unsafe {
                    core::arch::asm!(
                        "out dx, al",
                        in("dx") QEMU_DEBUG_PORT,
                        in("al") b,
                        options(nomem, nostack, preserves_flags)
                    );
                }
            }
            Ok(())
        }
    }

    /// Best-effort; formatting errors are dropped.
    pub fn write(args: fmt::Arguments) {
        let _ = DebugCon.write_fmt(args);
    }
}

#[cfg(not(all(feature = "qemu", target_arch = "x86_64")))]
mod debugcon {
    #[inline]
    pub const fn write(_: core::fmt::Arguments) {}
}
