use bytes::BytesMut;
use tokio_util::codec::{Decoder, Encoder};
use tracing::{debug, info, trace};

use crate::core::{Device, Result, SwarmConfig, MAX_LIGHT_VALUE};
use crate::membership::{MembershipTable, Upsert};
use crate::network::Transport;
use crate::protocol::{Beacon, BeaconCodec};
use crate::time::Clock;

use super::election::elect;
use super::schedule::{SlotState, TdmaSchedule};

/// Datagrams sent per reset request, as lost-datagram tolerance
const RESET_BURST: usize = 3;

/// Control-loop phase of one node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Fresh process; nothing scheduled yet
    Bootstrapping,

    /// Passive listening; populating the table before claiming a rank
    Discovering {
        /// When the discovery window closes
        until: u64,
    },

    /// Steady state: beaconing, electing, sweeping
    Active,

    /// A reset was seen; waiting out the stagger before restarting.
    /// Terminal: only the restart itself leaves this phase.
    PendingRestart {
        /// When the stagger wait expires
        deadline: u64,
    },
}

/// What one `poll` pass asks of the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Still listening for peers; nothing to render yet
    Discovering,

    /// Steady state; values for the local indicator
    Running {
        /// Whether this node currently leads the swarm
        is_master: bool,
        /// The reading this node is announcing
        light_value: u16,
    },

    /// A reset was seen; counting down the stagger wait
    Draining {
        /// Milliseconds until the restart fires
        remaining_ms: u64,
    },

    /// The stagger wait expired: invoke the restart capability now
    RestartDue,
}

/// Drives the per-node control loop
///
/// Owns the membership table and all local state; every mutable decision runs
/// on the single thread that calls `poll`. Phases advance purely by comparing
/// the injected clock against stored deadlines, so one `poll` per loop
/// iteration is the only scheduling the caller provides.
pub struct Coordinator<C, T> {
    identity: String,
    config: SwarmConfig,
    clock: C,
    transport: T,
    codec: BeaconCodec,
    table: MembershipTable,
    schedule: TdmaSchedule,
    phase: Phase,
    join_order: Option<u16>,
    is_master: bool,
    light_value: u16,
    cycle_start: u64,
    slot_latch: bool,
    next_election: u64,
    next_sweep: u64,
    next_status: u64,
}

impl<C: Clock, T: Transport> Coordinator<C, T> {
    /// Creates a coordinator for the node known to peers as `identity`
    pub fn new(identity: impl Into<String>, config: SwarmConfig, clock: C, transport: T) -> Self {
        let table = MembershipTable::with_capacity(config.capacity);
        let schedule = TdmaSchedule::new(config.slot_ms, config.tx_window_ms);

        Coordinator {
            identity: identity.into(),
            config,
            clock,
            transport,
            codec: BeaconCodec::new(),
            table,
            schedule,
            phase: Phase::Bootstrapping,
            join_order: None,
            is_master: false,
            light_value: 0,
            cycle_start: 0,
            slot_latch: false,
            next_election: 0,
            next_sweep: 0,
            next_status: 0,
        }
    }

    /// The identity this node announces under
    pub fn identity(&self) -> &str {
        &self.identity
    }

    /// The rank claimed after discovery, if assigned yet
    pub fn join_order(&self) -> Option<u16> {
        self.join_order
    }

    /// Whether this node currently believes it leads the swarm
    pub fn is_master(&self) -> bool {
        self.is_master
    }

    /// The membership table as currently observed
    pub fn table(&self) -> &MembershipTable {
        &self.table
    }

    /// Runs one pass of the control loop with the latest sensor sample
    pub fn poll(&mut self, light_sample: u16) -> Result<Step> {
        let now = self.clock.now_ms();
        self.light_value = light_sample.min(MAX_LIGHT_VALUE);
        self.drain_inbound(now);

        let step = match self.phase {
            Phase::Bootstrapping => {
                self.phase = Phase::Discovering {
                    until: now + self.config.discovery_window_ms,
                };
                info!(identity = %self.identity, "listening for peers");
                Step::Discovering
            }

            Phase::Discovering { until } => {
                if now >= until {
                    self.claim_join_order(now);
                    self.step_active(now)
                } else {
                    Step::Discovering
                }
            }

            Phase::Active => self.step_active(now),

            Phase::PendingRestart { deadline } => {
                if now >= deadline {
                    self.is_master = false;
                    self.light_value = 0;
                    Step::RestartDue
                } else {
                    Step::Draining {
                        remaining_ms: deadline - now,
                    }
                }
            }
        };

        Ok(step)
    }

    /// Broadcasts a reset to the whole swarm and schedules this node's own
    /// staggered restart, exactly as if the reset had been received
    pub fn request_reset(&mut self) -> Result<()> {
        let now = self.clock.now_ms();
        let mut buf = BytesMut::new();
        self.codec.encode(Beacon::reset(), &mut buf)?;
        for _ in 0..RESET_BURST {
            self.transport.broadcast(&buf)?;
        }
        info!(identity = %self.identity, "reset requested");
        self.begin_restart(now);
        Ok(())
    }

    /// Applies every pending inbound datagram to local state
    ///
    /// Receive and send failures are indistinguishable from an idle medium;
    /// malformed records are discarded with no further propagation.
    fn drain_inbound(&mut self, now: u64) {
        loop {
            let datagram = match self.transport.poll_recv() {
                Ok(Some(datagram)) => datagram,
                Ok(None) => break,
                Err(e) => {
                    trace!(error = %e, "receive failed");
                    break;
                }
            };

            let mut payload = datagram.payload;
            let beacon = match self.codec.decode(&mut payload) {
                Ok(Some(beacon)) => beacon,
                Ok(None) => continue,
                Err(e) => {
                    trace!(sender = %datagram.sender, error = %e, "dropping malformed record");
                    continue;
                }
            };

            if beacon.reset {
                self.begin_restart(now);
                continue;
            }

            match self.table.upsert(beacon.observed_from(&datagram.sender, now)) {
                Upsert::Inserted => {
                    info!(
                        identity = %datagram.sender,
                        join_order = beacon.join_order,
                        light = beacon.light_value,
                        "device joined"
                    );
                }
                Upsert::Updated | Upsert::Dropped => {}
            }
        }
    }

    /// Enters the terminal pending-restart phase
    ///
    /// The wait is the node's rank times the stagger unit; a node that never
    /// claimed a rank restarts immediately. Resets seen while already pending
    /// do not reschedule the wait.
    fn begin_restart(&mut self, now: u64) {
        if matches!(self.phase, Phase::PendingRestart { .. }) {
            return;
        }

        let rank = u64::from(self.join_order.unwrap_or(0));
        let delay = rank * self.config.restart_stagger_ms;
        info!(identity = %self.identity, delay_ms = delay, "reset received, restart pending");
        self.phase = Phase::PendingRestart {
            deadline: now + delay,
        };
    }

    /// Claims this node's rank once the discovery window closes
    ///
    /// If peers still remember this identity the stored ordinal is reused;
    /// otherwise the rank is one past the highest ordinal seen, or zero on an
    /// empty network. Registers self into the table and arms the steady-state
    /// deadlines.
    fn claim_join_order(&mut self, now: u64) {
        let order = match self.table.get(&self.identity) {
            Some(existing) => existing.join_order,
            None => self
                .table
                .max_join_order()
                .map(|highest| highest + 1)
                .unwrap_or(0),
        };

        self.join_order = Some(order);
        self.table.upsert(Device {
            identity: self.identity.clone(),
            last_seen: now,
            is_master: false,
            light_value: self.light_value,
            join_order: order,
        });

        self.cycle_start = now;
        self.slot_latch = false;
        self.next_election = now + self.config.election_interval_ms;
        self.next_sweep = now + self.config.sweep_interval_ms;
        self.next_status = now + self.config.status_interval_ms;
        self.phase = Phase::Active;
        info!(
            identity = %self.identity,
            join_order = order,
            peers = self.table.len().saturating_sub(1),
            "joined swarm"
        );
    }

    /// One steady-state pass: refresh self, transmit if slotted, and run any
    /// due election, sweep, or status dump
    fn step_active(&mut self, now: u64) -> Step {
        self.refresh_self(now);
        self.transmit_if_slotted(now);

        if now >= self.next_election {
            self.run_election(now);
            self.next_election = now + self.config.election_interval_ms;
        }

        if now >= self.next_sweep {
            self.sweep(now);
            self.next_sweep = now + self.config.sweep_interval_ms;
        }

        if now >= self.next_status {
            self.log_status(now);
            self.next_status = now + self.config.status_interval_ms;
        }

        Step::Running {
            is_master: self.is_master,
            light_value: self.light_value,
        }
    }

    /// Mirrors local state into the table as this node's own entry
    fn refresh_self(&mut self, now: u64) {
        let order = self.join_order.unwrap_or(0);
        self.table.upsert(Device {
            identity: self.identity.clone(),
            last_seen: now,
            is_master: self.is_master,
            light_value: self.light_value,
            join_order: order,
        });
    }

    /// Broadcasts this node's beacon once per cycle, inside its own slot
    ///
    /// The latch arms on entering the transmit window and releases on leaving
    /// it, so the beacon fires exactly once per pass through the slot.
    fn transmit_if_slotted(&mut self, now: u64) {
        let Some(order) = self.join_order else {
            return;
        };

        let active = self
            .table
            .active_count(now, self.config.activity_window_ms);
        let elapsed = now - self.cycle_start;

        match self.schedule.classify(elapsed, active, order) {
            SlotState::InWindow => {
                if !self.slot_latch {
                    self.slot_latch = true;
                    self.send_beacon(order);
                }
            }
            SlotState::Outside | SlotState::OutOfCycle => {
                self.slot_latch = false;
            }
        }
    }

    fn send_beacon(&mut self, order: u16) {
        let beacon = Beacon::announce(self.is_master, self.light_value, order);
        let mut buf = BytesMut::new();
        if self.codec.encode(beacon, &mut buf).is_err() {
            return;
        }
        if let Err(e) = self.transport.broadcast(&buf) {
            // Superseded by the next cycle's broadcast
            trace!(error = %e, "broadcast failed");
        }
    }

    /// One election pass over the active set
    ///
    /// Updates the leadership flag on every table entry and on local state;
    /// a transition is reported only when local leadership actually flips.
    fn run_election(&mut self, now: u64) {
        let leader = elect(self.table.iter(), now, self.config.activity_window_ms)
            .map(|device| device.identity.clone());
        self.table.mark_leader(leader.as_deref());

        let leading = leader.as_deref() == Some(self.identity.as_str());
        if leading != self.is_master {
            self.is_master = leading;
            if leading {
                info!(identity = %self.identity, light = self.light_value, "elected master");
            } else {
                info!(identity = %self.identity, master = ?leader, "lost master");
            }
        }
    }

    /// One eviction pass: every non-self device past the timeout is removed
    fn sweep(&mut self, now: u64) {
        for gone in
            self.table
                .evict_expired(now, self.config.eviction_timeout_ms, &self.identity)
        {
            info!(
                identity = %gone.identity,
                join_order = gone.join_order,
                age_ms = now.saturating_sub(gone.last_seen),
                "device timed out"
            );
        }
    }

    /// Periodic membership dump
    fn log_status(&self, now: u64) {
        info!(
            identity = %self.identity,
            devices = self.table.len(),
            active = self.table.active_count(now, self.config.activity_window_ms),
            join_order = ?self.join_order,
            master = self.is_master,
            "membership status"
        );
        for device in self.table.iter() {
            debug!(
                identity = %device.identity,
                join_order = device.join_order,
                light = device.light_value,
                master = device.is_master,
                age_ms = now.saturating_sub(device.last_seen),
                "member"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::rc::Rc;

    use super::*;
    use crate::core::{DISCOVERY_WINDOW_MS, ELECTION_INTERVAL_MS};
    use crate::network::Datagram;
    use crate::time::ManualClock;

    /// In-memory transport double with shared handles for the harness
    #[derive(Clone, Default)]
    struct FakeTransport {
        inbound: Rc<RefCell<VecDeque<Datagram>>>,
        sent: Rc<RefCell<Vec<Vec<u8>>>>,
    }

    impl FakeTransport {
        fn push_record(&self, sender: &str, text: &str) {
            self.inbound.borrow_mut().push_back(Datagram {
                payload: BytesMut::from(text.as_bytes()),
                sender: sender.to_string(),
            });
        }

        fn sent_records(&self) -> Vec<String> {
            self.sent
                .borrow()
                .iter()
                .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
                .collect()
        }
    }

    impl Transport for FakeTransport {
        fn broadcast(&mut self, payload: &[u8]) -> Result<()> {
            self.sent.borrow_mut().push(payload.to_vec());
            Ok(())
        }

        fn poll_recv(&mut self) -> Result<Option<Datagram>> {
            Ok(self.inbound.borrow_mut().pop_front())
        }
    }

    fn node(identity: &str) -> (Coordinator<ManualClock, FakeTransport>, ManualClock, FakeTransport) {
        let clock = ManualClock::new();
        let transport = FakeTransport::default();
        let coordinator = Coordinator::new(
            identity,
            SwarmConfig::default(),
            clock.clone(),
            transport.clone(),
        );
        (coordinator, clock, transport)
    }

    /// Drives a fresh coordinator through bootstrap and discovery
    fn activate(
        coordinator: &mut Coordinator<ManualClock, FakeTransport>,
        clock: &ManualClock,
        light: u16,
    ) -> Step {
        coordinator.poll(light).unwrap();
        clock.advance(DISCOVERY_WINDOW_MS);
        coordinator.poll(light).unwrap()
    }

    #[test]
    fn test_discovery_is_passive() {
        let (mut coordinator, clock, transport) = node("10.0.0.1");

        assert_eq!(coordinator.poll(100).unwrap(), Step::Discovering);
        clock.advance(1000);
        assert_eq!(coordinator.poll(100).unwrap(), Step::Discovering);

        assert!(transport.sent_records().is_empty());
        assert_eq!(coordinator.join_order(), None);
    }

    #[test]
    fn test_solo_node_claims_rank_zero() {
        let (mut coordinator, clock, transport) = node("10.0.0.1");

        let step = activate(&mut coordinator, &clock, 500);
        assert_eq!(coordinator.join_order(), Some(0));
        assert_eq!(
            step,
            Step::Running {
                is_master: false,
                light_value: 500
            }
        );

        // Rank 0 opens the cycle, so the first beacon goes out immediately
        assert_eq!(transport.sent_records(), vec!["0,500,0,0"]);
    }

    #[test]
    fn test_rank_follows_discovered_peers() {
        let (mut coordinator, clock, transport) = node("10.0.0.9");

        coordinator.poll(100).unwrap();
        clock.advance(1000);
        transport.push_record("10.0.0.1", "0,800,0,0");
        transport.push_record("10.0.0.2", "0,700,2,0");
        coordinator.poll(100).unwrap();

        clock.advance(DISCOVERY_WINDOW_MS - 1000);
        coordinator.poll(100).unwrap();

        assert_eq!(coordinator.join_order(), Some(3));
        assert_eq!(coordinator.table().len(), 3);
    }

    #[test]
    fn test_returning_node_keeps_rank() {
        let (mut coordinator, clock, transport) = node("10.0.0.9");

        coordinator.poll(100).unwrap();
        clock.advance(1000);
        // A record of our own identity survives in the group
        transport.push_record("10.0.0.9", "0,300,4,0");
        transport.push_record("10.0.0.1", "0,800,7,0");
        coordinator.poll(100).unwrap();

        clock.advance(DISCOVERY_WINDOW_MS - 1000);
        coordinator.poll(100).unwrap();

        // The stored ordinal wins over max+1
        assert_eq!(coordinator.join_order(), Some(4));
    }

    #[test]
    fn test_beacon_fires_once_per_slot_pass() {
        let (mut coordinator, clock, transport) = node("10.0.0.1");
        activate(&mut coordinator, &clock, 500);
        assert_eq!(transport.sent_records().len(), 1);

        // Repeated polls inside the same window stay latched
        clock.advance(2);
        coordinator.poll(500).unwrap();
        clock.advance(2);
        coordinator.poll(500).unwrap();
        assert_eq!(transport.sent_records().len(), 1);

        // Leaving the window releases the latch; the next cycle fires again
        clock.advance(50);
        coordinator.poll(500).unwrap();
        assert_eq!(transport.sent_records().len(), 1);
        clock.advance(46);
        coordinator.poll(500).unwrap();
        assert_eq!(transport.sent_records().len(), 2);
    }

    #[test]
    fn test_second_rank_transmits_in_second_slot() {
        let (mut coordinator, clock, transport) = node("10.0.0.9");

        coordinator.poll(100).unwrap();
        transport.push_record("10.0.0.1", "0,800,0,0");
        clock.advance(DISCOVERY_WINDOW_MS);
        coordinator.poll(100).unwrap();
        assert_eq!(coordinator.join_order(), Some(1));

        // Two active nodes: 200ms cycle, our slot opens at 100ms
        assert!(transport.sent_records().is_empty());

        clock.advance(99);
        coordinator.poll(100).unwrap();
        assert!(transport.sent_records().is_empty());

        clock.advance(1);
        coordinator.poll(100).unwrap();
        assert_eq!(transport.sent_records(), vec!["0,100,1,0"]);
    }

    #[test]
    fn test_rank_beyond_active_set_stays_silent() {
        let (mut coordinator, clock, transport) = node("10.0.0.9");

        coordinator.poll(100).unwrap();
        // Peers at ranks 0 and 1 put us at rank 2
        transport.push_record("10.0.0.1", "0,800,0,0");
        transport.push_record("10.0.0.2", "0,700,1,0");
        clock.advance(DISCOVERY_WINDOW_MS);
        coordinator.poll(100).unwrap();
        assert_eq!(coordinator.join_order(), Some(2));
        let baseline = transport.sent_records().len();

        // Let both peers go inactive: the active set shrinks below our rank
        // and our slot now lies outside the cycle
        clock.advance(3500);
        for _ in 0..40 {
            clock.advance(100);
            coordinator.poll(100).unwrap();
        }
        assert_eq!(transport.sent_records().len(), baseline);

        // A peer coming back grows the cycle and we speak again
        transport.push_record("10.0.0.1", "0,800,0,0");
        transport.push_record("10.0.0.2", "0,700,1,0");
        let mut sent_again = false;
        for _ in 0..40 {
            clock.advance(7);
            coordinator.poll(100).unwrap();
            if transport.sent_records().len() > baseline {
                sent_again = true;
                break;
            }
        }
        assert!(sent_again);
    }

    #[test]
    fn test_election_transitions() {
        let (mut coordinator, clock, transport) = node("10.0.0.5");
        activate(&mut coordinator, &clock, 800);

        // A brighter peer takes the lead at the first election pass
        transport.push_record("10.0.0.2", "0,950,1,0");
        clock.advance(ELECTION_INTERVAL_MS);
        let step = coordinator.poll(800).unwrap();
        assert_eq!(
            step,
            Step::Running {
                is_master: false,
                light_value: 800
            }
        );
        assert!(coordinator.table().get("10.0.0.2").unwrap().is_master);
        assert!(!coordinator.table().get("10.0.0.5").unwrap().is_master);

        // Once the peer goes quiet past the activity window, leadership flips
        clock.advance(3500);
        let step = coordinator.poll(800).unwrap();
        assert_eq!(
            step,
            Step::Running {
                is_master: true,
                light_value: 800
            }
        );
        assert!(coordinator.is_master());
    }

    #[test]
    fn test_election_tie_scenario() {
        let (mut coordinator, clock, transport) = node("10.0.0.5");
        activate(&mut coordinator, &clock, 800);

        transport.push_record("10.0.0.2", "0,950,1,0");
        transport.push_record("10.0.0.9", "0,950,2,0");
        clock.advance(ELECTION_INTERVAL_MS);
        coordinator.poll(800).unwrap();

        assert!(coordinator.table().get("10.0.0.2").unwrap().is_master);
        assert!(!coordinator.table().get("10.0.0.9").unwrap().is_master);
        assert!(!coordinator.is_master());
    }

    #[test]
    fn test_eviction_sweep() {
        let (mut coordinator, clock, transport) = node("10.0.0.1");
        activate(&mut coordinator, &clock, 500);

        transport.push_record("10.0.0.2", "0,700,1,0");
        coordinator.poll(500).unwrap();
        assert_eq!(coordinator.table().len(), 2);

        // Past the eviction timeout the peer goes; self never does
        clock.advance(6000);
        coordinator.poll(500).unwrap();
        assert!(coordinator.table().get("10.0.0.2").is_none());
        assert!(coordinator.table().get("10.0.0.1").is_some());
    }

    #[test]
    fn test_malformed_records_dropped() {
        let (mut coordinator, clock, transport) = node("10.0.0.1");
        activate(&mut coordinator, &clock, 500);

        transport.push_record("10.0.0.2", "0,700,1");
        transport.push_record("10.0.0.3", "0,700,1,0,5");
        transport.push_record("10.0.0.4", "0,bright,1,0");
        transport.push_record("10.0.0.5", "");
        coordinator.poll(500).unwrap();

        // Only the self entry remains
        assert_eq!(coordinator.table().len(), 1);
    }

    #[test]
    fn test_reset_staggers_by_rank() {
        let (mut coordinator, clock, transport) = node("10.0.0.9");

        coordinator.poll(100).unwrap();
        transport.push_record("10.0.0.1", "0,800,0,0");
        transport.push_record("10.0.0.2", "0,700,1,0");
        clock.advance(DISCOVERY_WINDOW_MS);
        coordinator.poll(100).unwrap();
        assert_eq!(coordinator.join_order(), Some(2));

        transport.push_record("10.0.0.1", "0,0,255,1");
        let step = coordinator.poll(100).unwrap();
        assert_eq!(
            step,
            Step::Draining {
                remaining_ms: 10_000
            }
        );

        clock.advance(9_999);
        assert_eq!(coordinator.poll(100).unwrap(), Step::Draining { remaining_ms: 1 });

        clock.advance(1);
        assert_eq!(coordinator.poll(100).unwrap(), Step::RestartDue);
        assert!(!coordinator.is_master());
    }

    #[test]
    fn test_reset_before_rank_restarts_immediately() {
        let (mut coordinator, clock, transport) = node("10.0.0.9");

        coordinator.poll(100).unwrap();
        clock.advance(500);
        transport.push_record("10.0.0.1", "0,0,255,1");
        assert_eq!(coordinator.poll(100).unwrap(), Step::RestartDue);
    }

    #[test]
    fn test_draining_keeps_servicing_inbound() {
        let (mut coordinator, clock, transport) = node("10.0.0.9");

        coordinator.poll(100).unwrap();
        transport.push_record("10.0.0.1", "0,800,0,0");
        clock.advance(DISCOVERY_WINDOW_MS);
        coordinator.poll(100).unwrap();
        assert_eq!(coordinator.join_order(), Some(1));

        transport.push_record("10.0.0.1", "0,0,255,1");
        coordinator.poll(100).unwrap();

        // Messages keep landing in the table during the wait, and a second
        // reset does not reschedule it
        clock.advance(2000);
        transport.push_record("10.0.0.2", "0,600,2,0");
        transport.push_record("10.0.0.1", "0,0,255,1");
        let step = coordinator.poll(100).unwrap();
        assert_eq!(
            step,
            Step::Draining {
                remaining_ms: 3_000
            }
        );
        assert!(coordinator.table().get("10.0.0.2").is_some());
    }

    #[test]
    fn test_request_reset_broadcasts_and_staggers() {
        let (mut coordinator, clock, transport) = node("10.0.0.9");

        coordinator.poll(100).unwrap();
        transport.push_record("10.0.0.1", "0,800,0,0");
        clock.advance(DISCOVERY_WINDOW_MS);
        coordinator.poll(100).unwrap();
        let sent_before = transport.sent_records().len();

        coordinator.request_reset().unwrap();

        let sent = transport.sent_records();
        assert_eq!(sent.len(), sent_before + RESET_BURST);
        assert!(sent[sent_before..].iter().all(|r| r == "0,0,255,1"));

        // Rank 1 waits one stagger unit
        let step = coordinator.poll(100).unwrap();
        assert_eq!(step, Step::Draining { remaining_ms: 5_000 });
    }

    #[test]
    fn test_table_capacity_holds_under_churn() {
        let (mut coordinator, clock, transport) = node("10.0.0.1");
        activate(&mut coordinator, &clock, 500);

        for i in 0..20 {
            transport.push_record(&format!("10.0.1.{}", i), "0,700,1,0");
        }
        coordinator.poll(500).unwrap();
        assert_eq!(coordinator.table().len(), SwarmConfig::default().capacity);
    }
}
