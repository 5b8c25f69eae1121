use crate::core::Device;

/// Picks the leader among devices seen within the activity window
///
/// The highest light value wins; ties go to the lexicographically smallest
/// identity, so repeated elections over the same readings are deterministic.
/// Returns `None` when no device is active: leadership is cleared, not
/// retained, until an election with data.
pub fn elect<'a, I>(devices: I, now_ms: u64, activity_window_ms: u64) -> Option<&'a Device>
where
    I: IntoIterator<Item = &'a Device>,
{
    devices
        .into_iter()
        .filter(|d| d.is_active(now_ms, activity_window_ms))
        .fold(None, |best: Option<&Device>, candidate| match best {
            None => Some(candidate),
            Some(current) => {
                if candidate.light_value > current.light_value
                    || (candidate.light_value == current.light_value
                        && candidate.identity < current.identity)
                {
                    Some(candidate)
                } else {
                    Some(current)
                }
            }
        })
}
