use std::cell::RefCell;

use log::{debug, error, info, warn};

use super::catalog::PrizeCatalog;
use super::config::WheelConfig;
use super::error::{DrawError, ServiceError};
use super::lifecycle::{DrawEvent, DrawPhase};
use super::model::{DrawOutcome, DrawRecord, DrawReveal, DrawSession};
use super::presenter::{
    rotation_completion, CompletionSignal, RotationCompletion, RotationRequest, RotationTicket,
    WheelPresenter,
};
use super::resolver::{resolve_outcome, Resolution};
use super::service::DrawService;
use super::spin::plan_spin;

/// Owns one wheel screen's draw lifecycle: fetch an outcome, spin to it,
/// reveal it, then unlock the next draw.
pub struct DrawOrchestrator<S, P> {
    service: S,
    presenter: P,
    config: WheelConfig,
    catalog: PrizeCatalog,
    state: RefCell<DrawState>,
}

struct DrawState {
    phase: DrawPhase,
    /// Cumulative wheel rotation. Only ever grows.
    rotation: f64,
    next_spin_id: u64,
    session: DrawSession,
    pending: Option<DrawReveal>,
    records: Vec<DrawRecord>,
    torn_down: bool,
}

impl DrawState {
    fn advance(&mut self, event: DrawEvent) -> bool {
        match self.phase.next(event) {
            Some(next) => {
                debug!("Draw phase {:?} -> {:?}", self.phase, next);
                self.phase = next;
                true
            }
            None => {
                debug!("Ignoring {:?} while {:?}", event, self.phase);
                false
            }
        }
    }
}

impl<S: DrawService, P: WheelPresenter> DrawOrchestrator<S, P> {
    pub async fn load(service: S, presenter: P, config: WheelConfig) -> Result<Self, DrawError> {
        config.validate()?;
        let init = service.init_draw().await.map_err(DrawError::Service)?;
        let catalog = PrizeCatalog::from_wedge_amounts(&init.wedge_amounts, &config)?;
        let session = DrawSession::from_init(&init);
        info!(
            "Lucky wheel ready: {} wedges, {} draws remaining",
            catalog.len(),
            session.remaining_credits
        );

        Ok(Self {
            service,
            presenter,
            config,
            catalog,
            state: RefCell::new(DrawState {
                phase: DrawPhase::Idle,
                rotation: 0.0,
                next_spin_id: 1,
                session,
                pending: None,
                records: Vec::new(),
                torn_down: false,
            }),
        })
    }

    /// Runs one draw attempt to the reveal. Returns `DrawError::Busy` without
    /// contacting the server while another attempt is in flight or unacknowledged.
    /// The reveal is handed back as soon as the wheel stops; draw history is
    /// left to a separate `refresh_records` call.
    pub async fn draw(&self) -> Result<DrawReveal, DrawError> {
        self.begin()?;

        let response = self.service.perform_draw().await;
        if self.is_torn_down() {
            debug!("Screen closed while waiting for the draw outcome");
            return Err(DrawError::TornDown);
        }
        let outcome = match response {
            Ok(outcome) => outcome,
            Err(err) => return Err(self.fail_request(err)),
        };

        let resolution = match resolve_outcome(&outcome, &self.catalog, self.config.unknown_prize) {
            Ok(resolution) => resolution,
            Err(err) => {
                let mut state = self.state.borrow_mut();
                // The server already spent the credit and counted the prize.
                state.session.consume_credit();
                state.session.apply_outcome(&outcome);
                state.advance(DrawEvent::RequestFailed);
                return Err(err);
            }
        };

        let (request, completion, signal) = self.start_spin(resolution.index());
        let ticket = signal.ticket();
        self.presenter.start_rotation(request, completion);

        let finished = signal.await;
        if self.is_torn_down() {
            debug!("Screen closed during spin {}, dropping its result", ticket.id);
            return Err(DrawError::TornDown);
        }
        if finished.is_err() {
            warn!(
                "Presenter dropped spin {} without reporting its end; revealing anyway",
                ticket.id
            );
        }

        Ok(self.finish_spin(ticket, resolution, outcome))
    }

    /// Closes the result. Returns the acknowledged reveal, or `None` when
    /// nothing was being revealed.
    pub fn acknowledge(&self) -> Option<DrawReveal> {
        let mut state = self.state.borrow_mut();
        if !state.advance(DrawEvent::Acknowledged) {
            return None;
        }
        state.pending.take()
    }

    pub async fn refresh_records(&self) -> Result<(), DrawError> {
        let records = self.service.draw_records().await.map_err(DrawError::Service)?;
        let mut state = self.state.borrow_mut();
        if state.torn_down {
            return Err(DrawError::TornDown);
        }
        state.records = records;
        Ok(())
    }

    /// Marks the screen as gone. Attempts still in flight finish with
    /// `DrawError::TornDown` and leave the state untouched.
    pub fn teardown(&self) {
        let mut state = self.state.borrow_mut();
        if !state.torn_down {
            info!("Lucky wheel torn down while {:?}", state.phase);
            state.torn_down = true;
        }
    }

    pub fn phase(&self) -> DrawPhase {
        self.state.borrow().phase
    }

    pub fn can_draw(&self) -> bool {
        let state = self.state.borrow();
        !state.torn_down && state.phase.is_idle() && state.session.has_credits()
    }

    pub fn session(&self) -> DrawSession {
        self.state.borrow().session.clone()
    }

    pub fn records(&self) -> Vec<DrawRecord> {
        self.state.borrow().records.clone()
    }

    pub fn pending_reveal(&self) -> Option<DrawReveal> {
        self.state.borrow().pending.clone()
    }

    pub fn catalog(&self) -> &PrizeCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &WheelConfig {
        &self.config
    }

    fn is_torn_down(&self) -> bool {
        self.state.borrow().torn_down
    }

    fn begin(&self) -> Result<(), DrawError> {
        let mut state = self.state.borrow_mut();
        if state.torn_down {
            return Err(DrawError::TornDown);
        }
        if !state.advance(DrawEvent::Trigger) {
            return Err(DrawError::Busy);
        }
        Ok(())
    }

    fn fail_request(&self, err: ServiceError) -> DrawError {
        let mut state = self.state.borrow_mut();
        state.advance(DrawEvent::RequestFailed);
        match err {
            ServiceError::NoCredits => {
                warn!("Draw refused: no credits remaining");
                state.session.remaining_credits = 0;
                DrawError::NoCredits {
                    invite_link: state.session.invite_link.clone(),
                }
            }
            other => {
                error!("Draw request failed: {}", other);
                DrawError::Service(other)
            }
        }
    }

    fn start_spin(&self, index: usize) -> (RotationRequest, RotationCompletion, CompletionSignal) {
        let mut state = self.state.borrow_mut();
        let plan = plan_spin(
            index,
            self.catalog.wedge_angle_span(),
            state.rotation,
            self.config.extra_turns,
        );
        let ticket = RotationTicket {
            id: state.next_spin_id,
            target_degrees: plan.target,
        };
        state.next_spin_id += 1;
        state.session.consume_credit();
        state.advance(DrawEvent::OutcomeResolved(ticket));
        debug!(
            "Spin {} to wedge {}: {} -> {} (delta {})",
            ticket.id, index, plan.start, plan.target, plan.delta
        );

        let (completion, signal) = rotation_completion(ticket);
        let request = RotationRequest {
            plan,
            duration_ms: self.config.spin_duration_ms,
        };
        (request, completion, signal)
    }

    fn finish_spin(
        &self,
        ticket: RotationTicket,
        resolution: Resolution,
        outcome: DrawOutcome,
    ) -> DrawReveal {
        let mut state = self.state.borrow_mut();
        state.rotation = ticket.target_degrees;
        state.advance(DrawEvent::RotationFinished(ticket));
        state.session.apply_outcome(&outcome);

        let index = resolution.index();
        let wedge = &self.catalog.wedges()[index];
        let reveal = DrawReveal {
            wedge_index: index,
            label: wedge.label.clone(),
            prize: wedge.prize.clone(),
            outcome,
            fallback: resolution.is_fallback(),
        };
        info!(
            "Draw revealed: {} (cumulative {})",
            reveal.label, reveal.outcome.cumulative_amount
        );
        state.pending = Some(reveal.clone());
        reveal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lucky_wheel::catalog::Prize;
    use crate::lucky_wheel::config::UnknownPrizePolicy;
    use crate::lucky_wheel::model::DrawInit;
    use crate::lucky_wheel::presenter::AnimatedProperty;
    use crate::lucky_wheel::spin::{angular_distance, landing_angle};
    use futures::executor::{block_on, LocalPool};
    use futures::future::{pending, FutureExt, LocalBoxFuture};
    use futures::task::LocalSpawnExt;
    use rust_decimal::Decimal;
    use std::cell::Cell;
    use std::collections::VecDeque;
    use std::rc::Rc;
    use std::str::FromStr;

    fn dec(value: &str) -> Decimal {
        Decimal::from_str(value).unwrap()
    }

    fn outcome(won: &str, cumulative: &str) -> DrawOutcome {
        DrawOutcome {
            won_amount: dec(won),
            cumulative_amount: dec(cumulative),
            goal_reached: false,
        }
    }

    struct FakeService {
        init: DrawInit,
        outcomes: RefCell<VecDeque<Result<DrawOutcome, ServiceError>>>,
        records: RefCell<Result<Vec<DrawRecord>, ServiceError>>,
        hang_records: Cell<bool>,
        draw_calls: Cell<usize>,
    }

    impl FakeService {
        fn new(outcomes: Vec<Result<DrawOutcome, ServiceError>>) -> Rc<Self> {
            Rc::new(Self {
                init: DrawInit {
                    remaining_credits: 3,
                    campaign_end_time: Some(1_800_000_000),
                    invite_link: Some("https://example.com/invite/abc".to_string()),
                    goal_amount: dec("500"),
                    cumulative_amount: dec("0"),
                    wedge_amounts: vec!["10".to_string(), "50".to_string(), "100".to_string()],
                },
                outcomes: RefCell::new(outcomes.into()),
                records: RefCell::new(Ok(Vec::new())),
                hang_records: Cell::new(false),
                draw_calls: Cell::new(0),
            })
        }
    }

    impl DrawService for Rc<FakeService> {
        fn init_draw(&self) -> LocalBoxFuture<'_, Result<DrawInit, ServiceError>> {
            let init = self.init.clone();
            async move { Ok(init) }.boxed_local()
        }

        fn perform_draw(&self) -> LocalBoxFuture<'_, Result<DrawOutcome, ServiceError>> {
            self.draw_calls.set(self.draw_calls.get() + 1);
            let next = self
                .outcomes
                .borrow_mut()
                .pop_front()
                .unwrap_or(Err(ServiceError::NoCredits));
            async move { next }.boxed_local()
        }

        fn draw_records(&self) -> LocalBoxFuture<'_, Result<Vec<DrawRecord>, ServiceError>> {
            if self.hang_records.get() {
                return pending().boxed_local();
            }
            let records = self.records.borrow().clone();
            async move { records }.boxed_local()
        }
    }

    /// Finishes every spin immediately, after a spurious glow animation end.
    #[derive(Clone, Default)]
    struct InstantPresenter {
        requests: Rc<RefCell<Vec<RotationRequest>>>,
    }

    impl WheelPresenter for InstantPresenter {
        fn start_rotation(&self, request: RotationRequest, on_complete: RotationCompletion) {
            self.requests.borrow_mut().push(request);
            assert!(!on_complete.animation_ended(AnimatedProperty::Other("glow"), request.plan.target));
            assert!(on_complete.animation_ended(AnimatedProperty::Rotation, request.plan.target));
        }
    }

    /// Holds completions until the test fires them.
    #[derive(Clone, Default)]
    struct DeferredPresenter {
        pending: Rc<RefCell<Vec<(RotationRequest, RotationCompletion)>>>,
    }

    impl WheelPresenter for DeferredPresenter {
        fn start_rotation(&self, request: RotationRequest, on_complete: RotationCompletion) {
            self.pending.borrow_mut().push((request, on_complete));
        }
    }

    impl DeferredPresenter {
        fn finish_last(&self) -> bool {
            let pending = self.pending.borrow();
            let (request, completion) = pending.last().unwrap();
            completion.animation_ended(AnimatedProperty::Rotation, request.plan.target)
        }
    }

    fn load<P: WheelPresenter>(
        service: &Rc<FakeService>,
        presenter: P,
        config: WheelConfig,
    ) -> DrawOrchestrator<Rc<FakeService>, P> {
        block_on(DrawOrchestrator::load(service.clone(), presenter, config)).unwrap()
    }

    #[test]
    fn test_load_builds_catalog_and_session() {
        let service = FakeService::new(vec![]);
        let orchestrator = load(&service, InstantPresenter::default(), WheelConfig::default());
        assert_eq!(orchestrator.catalog().labels(), vec!["10U", "50U", "100U", "Thank you"]);
        assert_eq!(orchestrator.session().remaining_credits, 3);
        assert_eq!(orchestrator.phase(), DrawPhase::Idle);
        assert!(orchestrator.can_draw());
        assert_eq!(orchestrator.pending_reveal(), None);
    }

    #[test]
    fn test_load_rejects_invalid_config() {
        let service = FakeService::new(vec![]);
        let config = WheelConfig { extra_turns: 0, ..WheelConfig::default() };
        let result = block_on(DrawOrchestrator::load(
            service.clone(),
            InstantPresenter::default(),
            config,
        ));
        assert!(matches!(result, Err(DrawError::Config(_))));
    }

    #[test]
    fn test_draw_reveals_and_acknowledges() {
        let service = FakeService::new(vec![Ok(outcome("50", "50"))]);
        *service.records.borrow_mut() = Ok(vec![DrawRecord { won_amount: dec("50"), created_at: 10 }]);
        let presenter = InstantPresenter::default();
        let orchestrator = load(&service, presenter.clone(), WheelConfig::default());

        let reveal = block_on(orchestrator.draw()).unwrap();
        assert_eq!(reveal.wedge_index, 1);
        assert_eq!(reveal.label, "50U");
        assert!(reveal.prize.is_win());
        assert!(!reveal.fallback);

        assert_eq!(orchestrator.phase(), DrawPhase::Revealing);
        assert!(!orchestrator.can_draw());
        assert_eq!(orchestrator.session().remaining_credits, 2);
        assert_eq!(orchestrator.session().cumulative_amount, dec("50"));
        assert_eq!(orchestrator.pending_reveal(), Some(reveal.clone()));

        assert!(orchestrator.records().is_empty());
        block_on(orchestrator.refresh_records()).unwrap();
        assert_eq!(orchestrator.records().len(), 1);

        let requests = presenter.requests.borrow();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].plan.target, 1665.0);
        assert_eq!(requests[0].duration_ms, 4000);
        drop(requests);

        assert_eq!(orchestrator.acknowledge(), Some(reveal));
        assert_eq!(orchestrator.phase(), DrawPhase::Idle);
        assert_eq!(orchestrator.pending_reveal(), None);
        assert_eq!(orchestrator.acknowledge(), None);
    }

    #[test]
    fn test_consecutive_draws_keep_turning_forward() {
        let service = FakeService::new(vec![Ok(outcome("50", "50")), Ok(outcome("0", "50"))]);
        let presenter = InstantPresenter::default();
        let orchestrator = load(&service, presenter.clone(), WheelConfig::default());

        block_on(orchestrator.draw()).unwrap();
        orchestrator.acknowledge();
        let second = block_on(orchestrator.draw()).unwrap();
        assert_eq!(second.wedge_index, 3);
        assert_eq!(second.prize, Prize::NoWin);

        let requests = presenter.requests.borrow();
        assert_eq!(requests[1].plan.start, 1665.0);
        assert_eq!(requests[1].plan.target, 3285.0);
        assert!(
            angular_distance(landing_angle(requests[1].plan.target), orchestrator.catalog().wedge_center(3))
                < 1e-6
        );
    }

    #[test]
    fn test_rapid_triggers_make_one_request() {
        let service = FakeService::new(vec![Ok(outcome("10", "10")), Ok(outcome("100", "110"))]);
        let presenter = DeferredPresenter::default();
        let orchestrator = Rc::new(load(&service, presenter.clone(), WheelConfig::default()));

        let mut pool = LocalPool::new();
        let spawner = pool.spawner();
        let results = Rc::new(RefCell::new(Vec::new()));
        for _ in 0..2 {
            let orchestrator = orchestrator.clone();
            let results = results.clone();
            spawner
                .spawn_local(async move {
                    let result = orchestrator.draw().await;
                    results.borrow_mut().push(result);
                })
                .unwrap();
        }

        pool.run_until_stalled();
        assert_eq!(service.draw_calls.get(), 1);
        assert!(orchestrator.phase().is_spinning());
        assert_eq!(*results.borrow(), vec![Err(DrawError::Busy)]);

        assert!(presenter.finish_last());
        pool.run_until_stalled();
        let results = results.borrow();
        assert_eq!(results.len(), 2);
        assert_eq!(results[1].as_ref().map(|r| r.wedge_index), Ok(0));
        assert_eq!(service.draw_calls.get(), 1);
    }

    #[test]
    fn test_unacknowledged_reveal_blocks_next_draw() {
        let service = FakeService::new(vec![Ok(outcome("10", "10")), Ok(outcome("10", "20"))]);
        let orchestrator = load(&service, InstantPresenter::default(), WheelConfig::default());

        block_on(orchestrator.draw()).unwrap();
        assert_eq!(block_on(orchestrator.draw()), Err(DrawError::Busy));
        assert_eq!(service.draw_calls.get(), 1);
    }

    #[test]
    fn test_no_credits_routes_to_invite() {
        let service = FakeService::new(vec![Err(ServiceError::NoCredits), Ok(outcome("10", "10"))]);
        let presenter = InstantPresenter::default();
        let orchestrator = load(&service, presenter.clone(), WheelConfig::default());

        let err = block_on(orchestrator.draw()).unwrap_err();
        assert_eq!(
            err,
            DrawError::NoCredits {
                invite_link: Some("https://example.com/invite/abc".to_string())
            }
        );
        assert_eq!(orchestrator.phase(), DrawPhase::Idle);
        assert_eq!(orchestrator.session().remaining_credits, 0);
        assert!(!orchestrator.can_draw());
        assert!(presenter.requests.borrow().is_empty());

        // Manual retry still reaches the server, which stays authoritative.
        assert!(block_on(orchestrator.draw()).is_ok());
        assert_eq!(service.draw_calls.get(), 2);
    }

    #[test]
    fn test_network_failure_returns_to_idle() {
        let service = FakeService::new(vec![Err(ServiceError::Network("timed out".to_string()))]);
        let orchestrator = load(&service, InstantPresenter::default(), WheelConfig::default());

        let err = block_on(orchestrator.draw()).unwrap_err();
        assert_eq!(err, DrawError::Service(ServiceError::Network("timed out".to_string())));
        assert_eq!(orchestrator.phase(), DrawPhase::Idle);
        assert_eq!(orchestrator.session().remaining_credits, 3);
        assert!(orchestrator.can_draw());
    }

    #[test]
    fn test_unknown_prize_is_reported_without_spinning() {
        let service = FakeService::new(vec![Ok(outcome("75", "75"))]);
        let presenter = InstantPresenter::default();
        let orchestrator = load(&service, presenter.clone(), WheelConfig::default());

        let err = block_on(orchestrator.draw()).unwrap_err();
        assert_eq!(err, DrawError::PrizeNotOnWheel { outcome: outcome("75", "75") });
        assert!(presenter.requests.borrow().is_empty());
        assert_eq!(orchestrator.phase(), DrawPhase::Idle);
        assert_eq!(orchestrator.session().remaining_credits, 2);
        assert_eq!(orchestrator.session().cumulative_amount, dec("75"));
    }

    #[test]
    fn test_unknown_prize_fallback_lands_on_first_wedge() {
        let service = FakeService::new(vec![Ok(outcome("75", "75"))]);
        let config = WheelConfig {
            unknown_prize: UnknownPrizePolicy::FallbackToFirstWedge,
            ..WheelConfig::default()
        };
        let orchestrator = load(&service, InstantPresenter::default(), config);

        let reveal = block_on(orchestrator.draw()).unwrap();
        assert_eq!(reveal.wedge_index, 0);
        assert_eq!(reveal.label, "10U");
        assert!(reveal.fallback);
        assert_eq!(reveal.outcome.won_amount, dec("75"));
    }

    #[test]
    fn test_teardown_mid_spin_ignores_completion() {
        let service = FakeService::new(vec![Ok(outcome("100", "100"))]);
        let presenter = DeferredPresenter::default();
        let orchestrator = Rc::new(load(&service, presenter.clone(), WheelConfig::default()));

        let mut pool = LocalPool::new();
        let result = Rc::new(RefCell::new(None));
        {
            let orchestrator = orchestrator.clone();
            let result = result.clone();
            pool.spawner()
                .spawn_local(async move {
                    *result.borrow_mut() = Some(orchestrator.draw().await);
                })
                .unwrap();
        }
        pool.run_until_stalled();
        assert!(orchestrator.phase().is_spinning());

        orchestrator.teardown();
        presenter.finish_last();
        pool.run_until_stalled();

        assert_eq!(*result.borrow(), Some(Err(DrawError::TornDown)));
        assert_eq!(orchestrator.pending_reveal(), None);
        assert_eq!(orchestrator.session().cumulative_amount, dec("0"));
        assert!(!orchestrator.can_draw());
        assert_eq!(block_on(orchestrator.draw()), Err(DrawError::TornDown));
    }

    #[test]
    fn test_dropped_completion_still_reveals() {
        let service = FakeService::new(vec![Ok(outcome("10", "10"))]);
        let presenter = DeferredPresenter::default();
        let orchestrator = Rc::new(load(&service, presenter.clone(), WheelConfig::default()));

        let mut pool = LocalPool::new();
        let result = Rc::new(RefCell::new(None));
        {
            let orchestrator = orchestrator.clone();
            let result = result.clone();
            pool.spawner()
                .spawn_local(async move {
                    *result.borrow_mut() = Some(orchestrator.draw().await);
                })
                .unwrap();
        }
        pool.run_until_stalled();
        presenter.pending.borrow_mut().clear();
        pool.run_until_stalled();

        let result = result.borrow();
        assert_eq!(result.as_ref().map(|r| r.as_ref().map(|reveal| reveal.wedge_index)), Some(Ok(0)));
        assert_eq!(orchestrator.phase(), DrawPhase::Revealing);
    }

    #[test]
    fn test_records_failure_leaves_reveal_alone() {
        let service = FakeService::new(vec![Ok(outcome("10", "10"))]);
        *service.records.borrow_mut() = Err(ServiceError::Network("offline".to_string()));
        let orchestrator = load(&service, InstantPresenter::default(), WheelConfig::default());

        let reveal = block_on(orchestrator.draw()).unwrap();
        assert_eq!(
            block_on(orchestrator.refresh_records()),
            Err(DrawError::Service(ServiceError::Network("offline".to_string())))
        );
        assert!(orchestrator.records().is_empty());
        assert_eq!(orchestrator.phase(), DrawPhase::Revealing);
        assert_eq!(orchestrator.pending_reveal(), Some(reveal));
    }

    #[test]
    fn test_reveal_does_not_wait_for_records() {
        let service = FakeService::new(vec![Ok(outcome("50", "50"))]);
        service.hang_records.set(true);
        let orchestrator = Rc::new(load(&service, InstantPresenter::default(), WheelConfig::default()));

        let mut pool = LocalPool::new();
        let result = Rc::new(RefCell::new(None));
        let records_done = Rc::new(Cell::new(false));
        {
            let orchestrator = orchestrator.clone();
            let result = result.clone();
            let records_done = records_done.clone();
            pool.spawner()
                .spawn_local(async move {
                    let reveal = orchestrator.draw().await;
                    *result.borrow_mut() = Some(reveal);
                    let _ = orchestrator.refresh_records().await;
                    records_done.set(true);
                })
                .unwrap();
        }
        pool.run_until_stalled();

        let result = result.borrow();
        assert_eq!(result.as_ref().map(|r| r.as_ref().map(|reveal| reveal.wedge_index)), Some(Ok(1)));
        assert_eq!(orchestrator.phase(), DrawPhase::Revealing);
        assert!(!records_done.get());
    }

    #[test]
    fn test_records_after_teardown_are_dropped() {
        let service = FakeService::new(vec![]);
        *service.records.borrow_mut() = Ok(vec![DrawRecord { won_amount: dec("10"), created_at: 10 }]);
        let orchestrator = load(&service, InstantPresenter::default(), WheelConfig::default());

        orchestrator.teardown();
        assert_eq!(block_on(orchestrator.refresh_records()), Err(DrawError::TornDown));
        assert!(orchestrator.records().is_empty());
    }
}
