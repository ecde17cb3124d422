use super::*;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::sync::Notify;
use ttt_core::PlayerId;
use ttt_core::POLL_INTERVAL;

/// Result of one scan of the waiting pool on behalf of a seeker.
pub enum Claim {
    /// The seeker and the partner it claimed, both now out of the pool.
    Paired(Participant, Participant),
    /// Still in the pool with nobody to pair with.
    Waiting,
    /// No longer in the pool: another seeker claimed it, or it hung up.
    Taken,
}

/// Shared pool of registered participants waiting for an opponent.
///
/// Every scan happens under one lock and removes both members of a pair
/// before releasing it, so no participant can end up in two games. Each
/// scan first drops waiters whose clients have hung up.
/// Arrivals and claims ring a bell so waiting seekers rescan early; the
/// poll interval bounds how long a seeker sleeps without one.
pub struct Lobby {
    pool: Mutex<Vec<Participant>>,
    bell: Notify,
    interval: Duration,
}

impl Default for Lobby {
    fn default() -> Self {
        Self::new(POLL_INTERVAL)
    }
}

impl Lobby {
    pub fn new(interval: Duration) -> Self {
        Self {
            pool: Mutex::new(Vec::new()),
            bell: Notify::new(),
            interval,
        }
    }
    pub async fn enqueue(&self, participant: Participant) {
        log::debug!("[lobby] player {} waiting", participant.id());
        self.pool.lock().await.push(participant);
        self.bell.notify_waiters();
    }
    /// Ids currently waiting, in arrival order.
    pub async fn waiting(&self) -> Vec<PlayerId> {
        self.pool.lock().await.iter().map(Participant::id).collect()
    }
}

impl Lobby {
    /// Scans the pool once for the first unpaired participant other than `id`.
    pub async fn claim(&self, id: PlayerId) -> Claim {
        let mut pool = self.pool.lock().await;
        for mut participant in std::mem::take(&mut *pool) {
            match participant.is_alive().await {
                true => pool.push(participant),
                false => log::debug!("[lobby] player {} left the pool", participant.id()),
            }
        }
        let Some(me) = pool.iter().position(|p| p.id() == id) else {
            return Claim::Taken;
        };
        let Some(partner) = pool
            .iter()
            .position(|p| p.id() != id && !p.is_paired())
        else {
            return Claim::Waiting;
        };
        // higher index first so the lower one stays valid
        let (seeker, partner) = if me < partner {
            let partner = pool.remove(partner);
            (pool.remove(me), partner)
        } else {
            let seeker = pool.remove(me);
            (seeker, pool.remove(partner))
        };
        drop(pool);
        log::debug!("[lobby] player {} claimed player {}", seeker.id(), partner.id());
        self.bell.notify_waiters();
        Claim::Paired(seeker, partner)
    }
    /// Rescans until `id` claims a partner or learns it was claimed itself.
    ///
    /// `None` means some other seeker now owns this participant and will
    /// run the game.
    pub async fn seek(&self, id: PlayerId) -> Option<(Participant, Participant)> {
        loop {
            let bell = self.bell.notified();
            match self.claim(id).await {
                Claim::Paired(seeker, partner) => return Some((seeker, partner)),
                Claim::Taken => return None,
                Claim::Waiting => {
                    let _ = tokio::time::timeout(self.interval, bell).await;
                }
            }
        }
    }
}
