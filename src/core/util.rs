//! Small helpers shared by the strategies.

use crate::consts::FOLDER_SEPARATOR;

/// Join segments with the Bitwarden folder separator
pub fn join_segments<'a, I>(segments: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    segments.into_iter().collect::<Vec<_>>().join(FOLDER_SEPARATOR)
}
