//! Marker-delimited replacement of a document region.

use crate::domain::entities::Markers;
use crate::domain::error::DomainError;

/// Replace the text between the first start marker and the first end marker.
///
/// Everything up to and including the start marker, and everything from the
/// end marker onward, is kept verbatim. Whatever sat between the markers is
/// discarded and `block` takes its place, framed by single newlines.
pub fn splice(document: &str, markers: &Markers, block: &str) -> Result<String, DomainError> {
    let start = document
        .find(&markers.start)
        .ok_or_else(|| DomainError::MarkerNotFound {
            marker: markers.start.clone(),
        })?;
    let end = document
        .find(&markers.end)
        .ok_or_else(|| DomainError::MarkerNotFound {
            marker: markers.end.clone(),
        })?;

    let head_end = start + markers.start.len();
    if end < head_end {
        return Err(DomainError::MarkersOutOfOrder {
            start: markers.start.clone(),
            end: markers.end.clone(),
        });
    }

    Ok(format!(
        "{}\n{}\n{}",
        &document[..head_end],
        block,
        &document[end..]
    ))
}
