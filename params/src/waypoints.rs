use kairo_dynamic::Object;

use crate::error::{Error, Result};

/// Decodes `waypoints`: indices of the coordinates that are reported as
/// via-points.
///
/// The list must hold at least two valid coordinate indices in strictly
/// increasing order, starting at the first coordinate and ending at the
/// last one. An absent key yields an empty list.
pub(crate) fn waypoints(object: &Object, coordinate_count: usize) -> Result<Vec<usize>> {
    let Some(value) = object.get("waypoints") else {
        return Ok(Vec::new());
    };
    let values = value.as_array().ok_or(Error::WaypointsNotArray)?;
    if values.len() < 2 {
        return Err(Error::TooFewWaypoints);
    }

    let indices = values
        .iter()
        .map(|value| {
            value
                .as_u32()
                .map(|index| index as usize)
                .ok_or(Error::WaypointNotInteger)
        })
        .collect::<Result<Vec<_>>>()?;

    if indices.iter().any(|index| *index >= coordinate_count) {
        return Err(Error::WaypointOutOfRange);
    }
    if indices.windows(2).any(|pair| pair[0] >= pair[1]) {
        return Err(Error::WaypointsNotIncreasing);
    }
    if indices.first() != Some(&0) {
        return Err(Error::FirstWaypointNotFirstCoordinate);
    }
    if indices.last() != Some(&(coordinate_count - 1)) {
        return Err(Error::LastWaypointNotLastCoordinate);
    }
    Ok(indices)
}
