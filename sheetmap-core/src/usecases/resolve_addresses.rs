use super::prelude::*;
use crate::gateways::{geocode::GeoCodingGateway, pace::Pacer};
use std::time::Duration;

pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;

pub const DEFAULT_PACING_DELAY: Duration = Duration::from_millis(500);

/// How hard and how fast the geocoding service is queried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total number of attempts per address, including the first one.
    pub max_attempts: u32,
    /// Pause after each successful request.
    pub pacing_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            pacing_delay: DEFAULT_PACING_DELAY,
        }
    }
}

/// Resolve all address groups one after another.
///
/// Failed attempts are retried immediately. Only successful requests
/// are followed by a pause, so a failing address is not throttled.
/// The first address that could not be resolved within
/// `policy.max_attempts` aborts the whole run.
pub fn resolve_address_groups<G, P>(
    geocoder: &G,
    pacer: &P,
    policy: &RetryPolicy,
    groups: Vec<AddressGroup>,
) -> Result<Vec<ResolvedPlace>>
where
    G: GeoCodingGateway + ?Sized,
    P: Pacer + ?Sized,
{
    let total = groups.len();
    let mut resolved = Vec::with_capacity(total);
    for (i, AddressGroup { address, names }) in groups.into_iter().enumerate() {
        let Some(place) = resolve_with_retries(geocoder, policy.max_attempts, &address) else {
            log::error!(
                "Giving up on address '{address}' after {} attempts",
                policy.max_attempts
            );
            return Err(Error::GeocodingExhausted { address });
        };
        log::debug!(
            "Resolved address {}/{total} '{address}' to place {}",
            i + 1,
            place.place_id
        );
        pacer.pause(policy.pacing_delay);
        resolved.push(ResolvedPlace::new(place, names));
    }
    Ok(resolved)
}

fn resolve_with_retries<G>(geocoder: &G, max_attempts: u32, address: &str) -> Option<GeocodedPlace>
where
    G: GeoCodingGateway + ?Sized,
{
    for attempt in 1..=max_attempts {
        log::debug!("Geocoding '{address}' (attempt {attempt}/{max_attempts})");
        match geocoder.resolve_address(address) {
            Ok(candidates) => match candidates.into_iter().next() {
                Some(place) if place.pos.is_valid() => return Some(place),
                Some(place) => {
                    log::warn!(
                        "Invalid position of place {} for address '{address}'",
                        place.place_id
                    );
                }
                None => {
                    log::warn!("No place found for address '{address}'");
                }
            },
            Err(err) => {
                log::warn!("Failed to geocode address '{address}': {err}");
            }
        }
    }
    None
}
