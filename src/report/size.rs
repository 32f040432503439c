const KIB: u64 = 1024;
const MIB: u64 = KIB * 1024;
const GIB: u64 = MIB * 1024;

/// Format a byte count with binary-prefix units and one decimal above bytes.
pub fn format_file_size(bytes: u64) -> String {
  if bytes < KIB {
    format!("{bytes} B")
  } else if bytes < MIB {
    format!("{:.1} KB", bytes as f64 / KIB as f64)
  } else if bytes < GIB {
    format!("{:.1} MB", bytes as f64 / MIB as f64)
  } else {
    format!("{:.1} GB", bytes as f64 / GIB as f64)
  }
}
