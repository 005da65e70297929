//! 페이지 이동 컨트롤러
//!
//! 버튼/키보드/제스처 입력을 모두 여기서 받는다. 전환이 확정되면 완료 알림
//! (`complete`) 또는 대기 시간 초과 (`poll`)가 올 때까지 새 이동 요청은 무시한다.

use std::time::Instant;

use crate::navigation::gesture::{GestureDecision, GesturePolicy, GestureSample};
use crate::navigation::state::Navigator;
use crate::navigation::transition::{SettleGuard, Transition, TransitionToken};

/// 시작된 전환. 표시 계층은 애니메이션 후 `token`으로 완료를 알린다
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingTransition {
    pub token: TransitionToken,
    pub transition: Transition,
}

/// 제스처를 놓았을 때의 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureOutcome {
    /// 전환 진행 중이라 무시됨
    Ignored,
    /// 제자리로 복귀해야 함
    Cancelled,
    Committed(PendingTransition),
}

#[derive(Debug, Clone)]
pub struct PageController {
    navigator: Navigator,
    policy: GesturePolicy,
    guard: SettleGuard,
}

impl PageController {
    pub fn new(navigator: Navigator, policy: GesturePolicy) -> Self {
        let guard = SettleGuard::new(policy.config().settle_timeout());
        Self {
            navigator,
            policy,
            guard,
        }
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn policy(&self) -> &GesturePolicy {
        &self.policy
    }

    /// 전환 진행 중 여부
    pub fn is_settling(&self) -> bool {
        self.guard.is_settling()
    }

    pub fn pending(&self) -> Option<&Transition> {
        self.guard.pending()
    }

    /// 다음/이전 페이지 요청
    pub fn request_step(&mut self, delta: isize, now: Instant) -> Option<PendingTransition> {
        if self.blocked(now) {
            return None;
        }
        let target = self.navigator.step_target(delta)?;
        Some(self.begin(target, now))
    }

    /// 특정 페이지 요청 (썸네일 클릭 등)
    pub fn request_jump(&mut self, index: usize, now: Instant) -> Option<PendingTransition> {
        if self.blocked(now) {
            return None;
        }
        let target = self.navigator.jump_target(index)?;
        Some(self.begin(target, now))
    }

    /// 버전 변경. 진행 중인 전환은 이전 버전 기준이므로 버린다
    pub fn select_version(&mut self, id: &str) -> bool {
        if !self.navigator.is_known_version(id) {
            return false;
        }
        if let Some(dropped) = self.guard.take() {
            log::debug!("버전 변경으로 전환 취소: {:?}", dropped);
        }
        self.navigator.select_version(id)
    }

    /// 드래그 중 표시할 이동량. 전환 중이면 None (입력 무시)
    pub fn drag(&mut self, delta: f64, now: Instant) -> Option<f64> {
        if self.blocked(now) {
            return None;
        }
        Some(self.policy.resist(delta, self.navigator.bounds()))
    }

    /// 드래그를 놓았을 때 판정 및 전환 시작
    pub fn release(
        &mut self,
        sample: GestureSample,
        viewport_width: f64,
        now: Instant,
    ) -> GestureOutcome {
        if self.blocked(now) {
            return GestureOutcome::Ignored;
        }
        match self.policy.decide(sample, viewport_width, self.navigator.bounds()) {
            GestureDecision::Commit(step) => match self.navigator.step_target(step) {
                Some(target) => GestureOutcome::Committed(self.begin(target, now)),
                None => GestureOutcome::Cancelled,
            },
            GestureDecision::Cancel => GestureOutcome::Cancelled,
        }
    }

    /// 애니메이션 완료 알림. 현재 전환의 토큰일 때만 확정
    pub fn complete(&mut self, token: TransitionToken) -> Option<Transition> {
        let transition = self.guard.take_if(token)?;
        Some(self.apply(transition))
    }

    /// 대기 시간이 지났으면 강제 확정
    pub fn poll(&mut self, now: Instant) -> Option<Transition> {
        if self.guard.is_expired(now) {
            log::debug!("전환 완료 알림 없음, 대기 시간 초과로 확정");
            self.finalize()
        } else {
            None
        }
    }

    /// 진행 중인 전환 확정. 두 번 불러도 한 번만 반영
    pub fn finalize(&mut self) -> Option<Transition> {
        let transition = self.guard.take()?;
        Some(self.apply(transition))
    }

    fn apply(&mut self, transition: Transition) -> Transition {
        match self.navigator.jump_to(transition.to) {
            Some(applied) => applied,
            None => {
                log::warn!("전환 대상이 범위를 벗어남: {:?}", transition);
                transition
            }
        }
    }

    /// 시간 초과된 전환을 정리한 뒤에도 진행 중이면 true
    fn blocked(&mut self, now: Instant) -> bool {
        self.poll(now);
        if self.guard.is_settling() {
            log::debug!("전환 진행 중, 입력 무시");
            true
        } else {
            false
        }
    }

    fn begin(&mut self, target: usize, now: Instant) -> PendingTransition {
        let transition = Transition::new(self.navigator.page_index(), target);
        let token = self.guard.begin(transition, now);
        PendingTransition { token, transition }
    }
}
