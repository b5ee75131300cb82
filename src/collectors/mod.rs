pub mod df;
pub mod mounts;

/// Device name prefixes that identify real block storage: SCSI/SATA, IDE,
/// virtio, Xen, NVMe, and device-mapper volumes.
const STORAGE_PREFIXES: &[&str] = &[
    "/dev/sd", "/dev/hd", "/dev/vd", "/dev/xvd", "/dev/nvme", "/dev/dm-", "/dev/mapper/",
];

/// Whether a device belongs to the checked set. Pseudo filesystems (tmpfs,
/// overlay, loop-mounted snaps, network shares) are left out.
pub fn is_storage_device(device: &str) -> bool {
    STORAGE_PREFIXES
        .iter()
        .any(|p| device.len() > p.len() && device.starts_with(p))
}
