/// Render a byte count as binary kilobytes with two decimals, e.g.
/// `1536 -> "1.50 KB"`.
///
/// Rounds half-way values up (`128 -> "0.13 KB"`), which is what the
/// browser's `toFixed(2)` does for these exact quotients. Integer math keeps
/// that exact for every size.
pub fn format_size_kb(bytes: u64) -> String {
  let hundredths = (u128::from(bytes) * 100 + 512) / 1024;
  format!("{}.{:02} KB", hundredths / 100, hundredths % 100)
}
