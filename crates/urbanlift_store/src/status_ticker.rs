use std::{future::Future, time::Duration};

use rand::{Rng, SeedableRng, rngs::SmallRng};
use tokio::{
    sync::mpsc,
    time::{MissedTickBehavior, interval},
};
use tracing::{debug, warn};
use urbanlift_matching::problem::{shipment::ShipmentRecord, shipment_status::ShipmentStatus};

use crate::{error::StoreError, shipment_store::ShipmentStore};

pub const DEFAULT_TICK_PERIOD: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusTransition {
    pub id: String,
    pub from: ShipmentStatus,
    pub to: ShipmentStatus,
}

/// Decides whether a shipment moves on during a tick.
pub trait TransitionPolicy: Send {
    fn propose(&mut self, record: &ShipmentRecord) -> Option<ShipmentStatus>;
}

/// Chance per tick that a shipment in `status` moves to the next status.
pub fn advance_probability(status: ShipmentStatus) -> f64 {
    match status {
        ShipmentStatus::Processing => 0.3,
        ShipmentStatus::Pending => 0.2,
        ShipmentStatus::InTransit => 0.1,
        ShipmentStatus::Delivered => 0.0,
    }
}

pub struct RandomTransitionPolicy<R> {
    rng: R,
}

impl<R: Rng> RandomTransitionPolicy<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomTransitionPolicy<SmallRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }
}

impl Default for RandomTransitionPolicy<SmallRng> {
    fn default() -> Self {
        Self::new(SmallRng::from_rng(&mut rand::rng()))
    }
}

impl<R: Rng + Send> TransitionPolicy for RandomTransitionPolicy<R> {
    fn propose(&mut self, record: &ShipmentRecord) -> Option<ShipmentStatus> {
        let next = record.status().next()?;

        self.rng
            .random_bool(advance_probability(record.status()))
            .then_some(next)
    }
}

/// Moves every shipment one status forward on each tick.
#[derive(Debug, Default, Clone, Copy)]
pub struct AlwaysAdvancePolicy;

impl TransitionPolicy for AlwaysAdvancePolicy {
    fn propose(&mut self, record: &ShipmentRecord) -> Option<ShipmentStatus> {
        record.status().next()
    }
}

/// Periodically proposes status transitions for the shipments of a store.
///
/// The ticker only reads the store; proposed transitions are sent over a channel and persisted
/// by [`apply_transitions`].
pub struct StatusTicker<S, P> {
    store: S,
    policy: P,
    sender: mpsc::Sender<StatusTransition>,
    max_ticks: Option<u64>,
}

impl<S: ShipmentStore, P: TransitionPolicy> StatusTicker<S, P> {
    pub fn new(store: S, policy: P, sender: mpsc::Sender<StatusTransition>) -> Self {
        Self {
            store,
            policy,
            sender,
            max_ticks: None,
        }
    }

    pub fn set_max_ticks(&mut self, max_ticks: u64) -> &mut Self {
        self.max_ticks = Some(max_ticks);
        self
    }

    pub fn tick(&mut self) -> Result<Vec<StatusTransition>, StoreError> {
        let records = self.store.list()?;

        Ok(records
            .iter()
            .filter_map(|record| {
                let to = self.policy.propose(record)?;
                (to != record.status()).then(|| StatusTransition {
                    id: record.id().to_owned(),
                    from: record.status(),
                    to,
                })
            })
            .collect())
    }

    /// Ticks every `period` until `shutdown` resolves, the tick limit is reached or the receiver
    /// is dropped. Returns the number of ticks performed.
    pub async fn run(
        mut self,
        period: Duration,
        shutdown: impl Future<Output = ()>,
    ) -> Result<u64, StoreError> {
        if period.is_zero() {
            return Err(StoreError::ZeroTickPeriod);
        }

        let mut interval = interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        tokio::pin!(shutdown);

        let mut ticks = 0;
        while self.max_ticks.is_none_or(|max_ticks| ticks < max_ticks) {
            tokio::select! {
                biased;
                _ = &mut shutdown => {
                    debug!(ticks, "status ticker shut down");
                    break;
                }
                _ = interval.tick() => {}
            }

            ticks += 1;
            let transitions = self.tick()?;
            debug!(tick = ticks, transitions = transitions.len(), "status tick");

            for transition in transitions {
                if self.sender.send(transition).await.is_err() {
                    debug!(ticks, "transition receiver closed");
                    return Ok(ticks);
                }
            }
        }

        Ok(ticks)
    }
}

/// Persists transitions until every sender is dropped. Rejected transitions are logged and
/// skipped. Returns the number of transitions applied.
pub async fn apply_transitions<S: ShipmentStore>(
    mut receiver: mpsc::Receiver<StatusTransition>,
    store: S,
) -> usize {
    let mut applied = 0;

    while let Some(transition) = receiver.recv().await {
        match store.update_status(&transition.id, transition.to) {
            Ok(_) => {
                debug!(
                    id = transition.id,
                    from = %transition.from,
                    to = %transition.to,
                    "status advanced"
                );
                applied += 1;
            }
            Err(error) => {
                warn!(id = transition.id, %error, "status transition rejected");
            }
        }
    }

    applied
}
