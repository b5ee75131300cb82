/// One mounted filesystem as reported by the inventory, sizes in megabytes.
///
/// `percent_used` is carried as the raw capacity text (without the trailing
/// `%`); it is validated when the record is classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilesystemRecord {
    pub device:       String,
    pub size_mb:      u64,
    pub used_mb:      u64,
    pub percent_used: String,
    pub mount_point:  String,
}

impl FilesystemRecord {
    /// Returns the short device name ("sda1" from "/dev/sda1").
    pub fn short_device(&self) -> &str {
        self.device.trim_start_matches("/dev/").trim_start_matches("mapper/")
    }
}
