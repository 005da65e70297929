//! 페이지 전환 스타일과 전환 중 상태 보호
//!
//! 전환 애니메이션 완료 알림은 항상 온다는 보장이 없다 (중단된 전환 등).
//! 완료 알림과 대기 시간 초과 둘 다 같은 `take`로 모이며, 두 번 불러도 한 번만 반영된다.

use std::time::{Duration, Instant};

/// 인덱스 변화에 따른 권장 애니메이션
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionStyle {
    /// 인접 페이지 (|Δ| = 1)
    Slide,
    /// 떨어진 페이지
    CrossFade,
}

impl TransitionStyle {
    pub fn between(from: usize, to: usize) -> Self {
        if from.abs_diff(to) == 1 {
            TransitionStyle::Slide
        } else {
            TransitionStyle::CrossFade
        }
    }
}

/// 페이지 전환 한 건
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: usize,
    pub to: usize,
    pub style: TransitionStyle,
}

impl Transition {
    pub fn new(from: usize, to: usize) -> Self {
        Self {
            from,
            to,
            style: TransitionStyle::between(from, to),
        }
    }
}

/// 진행 중인 전환 식별자 (완료 알림 매칭용)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransitionToken(u64);

#[derive(Debug, Clone, Copy)]
struct InFlight {
    token: TransitionToken,
    transition: Transition,
    started_at: Instant,
}

/// 전환 중 플래그 + 대기 시간 초과
#[derive(Debug, Clone)]
pub struct SettleGuard {
    in_flight: Option<InFlight>,
    timeout: Duration,
    next_token: u64,
}

impl SettleGuard {
    pub fn new(timeout: Duration) -> Self {
        Self {
            in_flight: None,
            timeout,
            next_token: 0,
        }
    }

    /// 전환 진행 중 여부
    pub fn is_settling(&self) -> bool {
        self.in_flight.is_some()
    }

    /// 진행 중인 전환
    pub fn pending(&self) -> Option<&Transition> {
        self.in_flight.as_ref().map(|f| &f.transition)
    }

    /// 전환 시작. 이미 진행 중인 전환은 덮어쓴다 (호출자가 먼저 확인)
    pub fn begin(&mut self, transition: Transition, now: Instant) -> TransitionToken {
        self.next_token += 1;
        let token = TransitionToken(self.next_token);
        self.in_flight = Some(InFlight {
            token,
            transition,
            started_at: now,
        });
        token
    }

    /// 대기 시간이 지났는지
    pub fn is_expired(&self, now: Instant) -> bool {
        self.in_flight
            .as_ref()
            .is_some_and(|f| now.saturating_duration_since(f.started_at) >= self.timeout)
    }

    /// 진행 중인 전환을 꺼냄. 두 번째 호출부터는 None
    pub fn take(&mut self) -> Option<Transition> {
        self.in_flight.take().map(|f| f.transition)
    }

    /// 토큰이 현재 전환과 일치할 때만 꺼냄 (늦게 도착한 완료 알림 무시)
    pub fn take_if(&mut self, token: TransitionToken) -> Option<Transition> {
        if self.in_flight.is_some_and(|f| f.token == token) {
            self.take()
        } else {
            None
        }
    }
}
