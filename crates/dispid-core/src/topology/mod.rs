//! Topology negotiation
//!
//! Retrieving the topology is a two-step dance with the OS: ask for buffer
//! sizes, then query with buffers of that size. Another process (or the OS
//! itself) may change the display state between the two calls, in which
//! case the query reports the buffer as too small and the whole exchange
//! starts over.
//!
//! ```text
//! buffer_sizes ──► query_display_config ──► Ok ──► Topology
//!      ▲                    │
//!      └── INSUFFICIENT ◄───┘   (at most `max_buffer_retries` times)
//! ```

pub mod dump;

use crate::config::TopologyConfig;
use crate::model::{QueryScope, Topology};
use crate::status::StatusCode;
use crate::traits::DisplayConfigApi;
use chrono::Utc;
use tracing::{debug, error, trace};

pub use dump::{TopologyDump, dump_identity_bytes, dump_topology};

/// Query the current topology
///
/// Returns `None` when the topology is unavailable right now; the cause has
/// already been logged. Callers treat that as a transient condition.
pub fn query_topology<A>(api: &A, scope: QueryScope, config: &TopologyConfig) -> Option<Topology>
where
    A: DisplayConfigApi + ?Sized,
{
    let mut retries = 0usize;

    loop {
        let sizes = match api.buffer_sizes(scope) {
            Ok(sizes) => sizes,
            Err(code) => {
                error!(
                    "{} failed to get display paths and modes!",
                    api.error_string(code)
                );
                return None;
            }
        };

        match api.query_display_config(scope, sizes) {
            Ok(raw) => {
                let topology = Topology {
                    scope,
                    paths: raw.paths,
                    modes: raw.modes,
                    captured_at: Utc::now(),
                };
                trace!(
                    "Result of {} display config query:\n{}\n",
                    scope.as_str(),
                    dump_topology(&topology)
                );
                return Some(topology);
            }
            Err(StatusCode::INSUFFICIENT_BUFFER) => {
                if retries >= config.max_buffer_retries {
                    error!(
                        "{} display configuration kept changing, gave up after {} retries!",
                        api.error_string(StatusCode::INSUFFICIENT_BUFFER),
                        retries
                    );
                    return None;
                }
                retries += 1;
                debug!(
                    "Display configuration changed between size and query calls, retrying ({}/{})",
                    retries, config.max_buffer_retries
                );
            }
            Err(code) => {
                error!(
                    "{} failed to query display paths and modes!",
                    api.error_string(code)
                );
                return None;
            }
        }
    }
}
