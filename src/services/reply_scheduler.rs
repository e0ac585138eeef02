//! Delayed canned-reply scheduler
//!
//! Each scheduled reply runs on its own worker thread that sleeps for the
//! configured delay, then sends a randomly picked canned answer back over a
//! channel. Every worker holds a clone of the scheduler's cancellation token;
//! cancelling (or dropping the scheduler) guarantees no pending reply is
//! delivered afterwards.

use rand::Rng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tracing::debug;

pub const CANNED_REPLIES: [&str; 4] = [
    "Based on current market trends, FinTech startups are showing strong growth with an average 23% IRR. \
I recommend focusing on companies with proven revenue models and experienced founding teams.",
    "The startup you're analyzing shows healthy growth metrics with 15% month-over-month user acquisition. \
However, their burn rate indicates they'll need additional funding within 8-10 months.",
    "Market analysis suggests CleanTech investments are gaining momentum due to regulatory support. \
Consider diversifying 20-30% of your portfolio in this sector for long-term returns.",
    "Risk assessment: This startup has a moderate risk profile. Strong technical team and market validation, \
but limited financial runway. Recommended investment: $25K-50K range.",
];

/// Shared flag checked by workers before they deliver
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// A reply that finished its delay
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledReply {
    pub ticket: u64,
    generation: u64,
    pub content: String,
}

pub struct ReplyScheduler {
    delay: Duration,
    tx: Sender<ScheduledReply>,
    rx: Receiver<ScheduledReply>,
    token: CancelToken,
    /// Bumped on every cancel so late deliveries from old workers are ignored
    generation: u64,
    next_ticket: u64,
    pending: usize,
}

impl ReplyScheduler {
    pub fn new(delay: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            delay,
            tx,
            rx,
            token: CancelToken::default(),
            generation: 0,
            next_ticket: 1,
            pending: 0,
        }
    }

    /// Schedule one canned reply, returning its ticket
    pub fn schedule(&mut self) -> u64 {
        let ticket = self.next_ticket;
        self.next_ticket += 1;
        self.pending += 1;

        let tx = self.tx.clone();
        let token = self.token.clone();
        let delay = self.delay;
        let generation = self.generation;

        thread::spawn(move || {
            thread::sleep(delay);
            if token.is_cancelled() {
                debug!(ticket, "chat reply cancelled before delivery");
                return;
            }
            let content = pick_reply().to_string();
            // Receiver is gone once the scheduler is dropped
            let _ = tx.send(ScheduledReply {
                ticket,
                generation,
                content,
            });
        });

        debug!(ticket, delay_ms = self.delay.as_millis() as u64, "chat reply scheduled");
        ticket
    }

    /// Drain every reply that has arrived, in arrival order
    pub fn poll(&mut self) -> Vec<ScheduledReply> {
        let mut replies = Vec::new();
        loop {
            match self.rx.try_recv() {
                Ok(reply) => {
                    if reply.generation != self.generation {
                        continue;
                    }
                    self.pending = self.pending.saturating_sub(1);
                    replies.push(reply);
                }
                // The scheduler keeps a sender, so Disconnected cannot happen
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        replies
    }

    /// Number of replies scheduled but not yet delivered
    pub fn pending(&self) -> usize {
        self.pending
    }

    /// Cancel every outstanding reply
    ///
    /// The scheduler stays usable; later `schedule` calls get a fresh token.
    pub fn cancel_all(&mut self) {
        if self.pending > 0 {
            debug!(pending = self.pending, "cancelling pending chat replies");
        }
        self.token.cancel();
        self.token = CancelToken::default();
        self.generation += 1;
        self.pending = 0;
    }
}

impl Drop for ReplyScheduler {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

/// Pick one canned reply uniformly at random
fn pick_reply() -> &'static str {
    let index = rand::rng().random_range(0..CANNED_REPLIES.len());
    CANNED_REPLIES[index]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    /// Poll until `count` replies arrived or the deadline passed
    fn wait_for(scheduler: &mut ReplyScheduler, count: usize) -> Vec<ScheduledReply> {
        let deadline = Instant::now() + Duration::from_secs(5);
        let mut replies = Vec::new();
        while replies.len() < count && Instant::now() < deadline {
            replies.extend(scheduler.poll());
            thread::sleep(Duration::from_millis(5));
        }
        replies
    }

    #[test]
    fn test_reply_arrives_after_delay() {
        let mut scheduler = ReplyScheduler::new(Duration::from_millis(10));
        let ticket = scheduler.schedule();
        assert_eq!(scheduler.pending(), 1);

        let replies = wait_for(&mut scheduler, 1);
        assert_eq!(replies.len(), 1);
        assert_eq!(replies[0].ticket, ticket);
        assert!(CANNED_REPLIES.contains(&replies[0].content.as_str()));
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_reply_not_delivered_before_delay() {
        let mut scheduler = ReplyScheduler::new(Duration::from_secs(2));
        scheduler.schedule();
        assert!(scheduler.poll().is_empty());
        assert_eq!(scheduler.pending(), 1);
    }

    #[test]
    fn test_each_schedule_yields_one_reply() {
        let mut scheduler = ReplyScheduler::new(Duration::from_millis(5));
        let tickets: Vec<u64> = (0..3).map(|_| scheduler.schedule()).collect();

        let replies = wait_for(&mut scheduler, 3);
        let mut delivered: Vec<u64> = replies.iter().map(|r| r.ticket).collect();
        delivered.sort_unstable();
        assert_eq!(delivered, tickets);
    }

    #[test]
    fn test_cancelled_replies_are_never_delivered() {
        let mut scheduler = ReplyScheduler::new(Duration::from_millis(30));
        scheduler.schedule();
        scheduler.schedule();
        scheduler.cancel_all();
        assert_eq!(scheduler.pending(), 0);

        thread::sleep(Duration::from_millis(120));
        assert!(scheduler.poll().is_empty());
    }

    #[test]
    fn test_scheduler_usable_after_cancel() {
        let mut scheduler = ReplyScheduler::new(Duration::from_millis(5));
        scheduler.schedule();
        scheduler.cancel_all();

        let ticket = scheduler.schedule();
        let replies = wait_for(&mut scheduler, 1);
        assert_eq!(replies.len(), 1);
        assert_eq!(replies[0].ticket, ticket);
    }

    #[test]
    fn test_drop_cancels_token() {
        let scheduler = ReplyScheduler::new(Duration::from_millis(5));
        let token = scheduler.token.clone();
        drop(scheduler);
        assert!(token.is_cancelled());
    }
}
