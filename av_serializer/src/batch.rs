//! The batch file refreshing the local copy of the Audiovault media and database

use std::io::{self, Write};
use std::path::Path;

use chrono::NaiveDate;

/// Write the `xcopy` commands for the next run
///
/// The first command copies the media modified on or after `last_modified` from `av_media` into
/// `media_files`, the second copies the database at `av_location` into the working directory.
///
/// # Errors
///
/// * Writing to `writer` fails
///
/// # Examples
///
/// ```rust
/// use av_serializer::batch::write_copy_batch;
/// use chrono::NaiveDate;
/// use std::path::Path;
///
/// # fn main() -> std::io::Result<()> {
/// let mut script = Vec::new();
/// let last_modified = NaiveDate::from_ymd_opt(2019, 7, 4).unwrap();
/// write_copy_batch(&mut script, r"\\av\audio", Path::new("media"), r"\\av\db.mdb", last_modified)?;
///
/// assert_eq!(
/// 	String::from_utf8(script).unwrap(),
/// 	"xcopy \\\\av\\audio media /d:07-04-2019 /i /s\n\nxcopy \\\\av\\db.mdb .\\"
/// );
/// # Ok(()) }
/// ```
pub fn write_copy_batch<W>(
	mut writer: W,
	av_media: &str,
	media_files: &Path,
	av_location: &str,
	last_modified: NaiveDate,
) -> io::Result<()>
where
	W: Write,
{
	writeln!(
		writer,
		"xcopy {av_media} {} /d:{} /i /s\n",
		media_files.display(),
		last_modified.format("%m-%d-%Y")
	)?;
	write!(writer, "xcopy {av_location} .\\")?;

	writer.flush()
}
