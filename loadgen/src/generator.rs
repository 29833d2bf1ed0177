use std::io::Write;

use log::{error, info, warn};
use rand::Rng;

use crate::{
    config::{FailurePolicy, LoadConfig},
    error::{LoadErr, Result},
    payload::EventPayload,
    plate::Plate,
    report::RunReport,
    transport::{Reply, Transport},
};

/// Sends `config.requests()` payloads one after the other, each with a fresh plate.
pub struct LoadGenerator<T, R> {
    config: LoadConfig,
    transport: T,
    rng: R,
}

impl<T, R> LoadGenerator<T, R>
where
    T: Transport,
    R: Rng,
{
    /// Creates a new `LoadGenerator`.
    ///
    /// # Arguments
    /// * `config` - Target, request count, channel and failure policy of the run.
    /// * `transport` - How each payload reaches the target.
    /// * `rng` - The source of the generated plates.
    pub fn new(config: LoadConfig, transport: T, rng: R) -> Self {
        Self {
            config,
            transport,
            rng,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Runs every request in order, writing three lines per delivered request to `out`: the
    /// payload, the status code and the response body.
    ///
    /// # Returns
    /// The counters of the run.
    ///
    /// # Errors
    /// Under `FailurePolicy::FailFast`, `LoadErr::Aborted` on the first transport failure; no
    /// request is attempted after it. Writing to `out` failing is always fatal.
    pub async fn run<W: Write>(&mut self, out: &mut W) -> Result<RunReport> {
        let total = self.config.requests();
        let target = self.config.target().to_string();
        info!("sending {total} request(s) to {target}");

        let mut report = RunReport::default();
        for request in 1..=total {
            let payload = EventPayload::new(self.config.channel(), Plate::generate(&mut self.rng));
            let body = serde_json::to_string(&payload)?;

            match self.transport.post(&target, &payload).await {
                Ok(Reply { status, body: text }) => {
                    writeln!(out, "sent: {body}")?;
                    writeln!(out, "status: {status}")?;
                    writeln!(out, "response: {text}")?;
                    report.record_reply(status);
                }
                Err(e) => match self.config.policy() {
                    FailurePolicy::FailFast => {
                        error!("request {request}/{total} failed, aborting: {e}");
                        return Err(LoadErr::Aborted {
                            request,
                            source: Box::new(e),
                        });
                    }
                    FailurePolicy::Continue => {
                        warn!("request {request}/{total} failed: {e}");
                        writeln!(out, "sent: {body}")?;
                        writeln!(out, "error: {e}")?;
                        report.record_failure();
                    }
                },
            }
        }

        info!("{report}");
        Ok(report)
    }
}
