//! 드래그/스크롤 제스처 → 페이지 이동 판정
//!
//! 부호 규칙: `delta`가 음수면 내용을 왼쪽으로 끈 것 (다음 페이지),
//! 양수면 오른쪽으로 끈 것 (이전 페이지). `velocity`도 같은 부호를 쓴다 (px/ms).

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// 제스처 판정 설정
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GestureConfig {
    /// 이 비율 × 화면 너비 이상 끌면 이동 확정
    #[serde(default = "default_commit_ratio")]
    pub commit_ratio: f64,
    /// 플릭으로 인정하는 최소 속도 (px/ms)
    #[serde(default = "default_flick_velocity")]
    pub flick_velocity: f64,
    /// 플릭으로 인정하는 최소 이동 거리 (px)
    #[serde(default = "default_flick_min_px")]
    pub flick_min_px: f64,
    /// 첫/마지막 페이지 바깥 방향 드래그 감쇠 비율
    #[serde(default = "default_rubber_band")]
    pub rubber_band: f64,
    /// 전환 완료 알림이 오지 않을 때 강제 확정까지 대기 시간 (ms)
    #[serde(default = "default_settle_timeout_ms")]
    pub settle_timeout_ms: u64,
}

fn default_commit_ratio() -> f64 {
    0.2
}

fn default_flick_velocity() -> f64 {
    0.3
}

fn default_flick_min_px() -> f64 {
    10.0
}

fn default_rubber_band() -> f64 {
    0.25
}

fn default_settle_timeout_ms() -> u64 {
    600
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            commit_ratio: default_commit_ratio(),
            flick_velocity: default_flick_velocity(),
            flick_min_px: default_flick_min_px(),
            rubber_band: default_rubber_band(),
            settle_timeout_ms: default_settle_timeout_ms(),
        }
    }
}

impl GestureConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_commit_ratio(mut self, ratio: f64) -> Self {
        self.commit_ratio = ratio;
        self
    }

    pub fn with_flick(mut self, velocity: f64, min_px: f64) -> Self {
        self.flick_velocity = velocity;
        self.flick_min_px = min_px;
        self
    }

    pub fn with_rubber_band(mut self, factor: f64) -> Self {
        self.rubber_band = factor;
        self
    }

    pub fn with_settle_timeout_ms(mut self, ms: u64) -> Self {
        self.settle_timeout_ms = ms;
        self
    }

    pub fn settle_timeout(&self) -> Duration {
        Duration::from_millis(self.settle_timeout_ms)
    }
}

/// 현재 위치에서 이동 가능한 방향
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub has_prev: bool,
    pub has_next: bool,
}

/// 손을 뗀 순간의 제스처 샘플
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSample {
    /// 누적 이동 거리 (px)
    pub delta: f64,
    /// 속도 (px/ms)
    pub velocity: f64,
}

/// 판정 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureDecision {
    /// `step(+1)` 또는 `step(-1)`
    Commit(isize),
    /// 제자리로 복귀
    Cancel,
}

/// 제스처 판정기. 화면/입력 장치와 무관한 순수 계산
#[derive(Debug, Clone, Default)]
pub struct GesturePolicy {
    config: GestureConfig,
}

impl GesturePolicy {
    pub fn new(config: GestureConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// 드래그 중 표시할 이동량. 막힌 방향이면 감쇠
    pub fn resist(&self, delta: f64, bounds: Bounds) -> f64 {
        match direction_of(delta) {
            Some(step) if !is_allowed(step, bounds) => delta * self.config.rubber_band,
            _ => delta,
        }
    }

    /// 손을 뗐을 때 이동 확정/취소 판정
    pub fn decide(
        &self,
        sample: GestureSample,
        viewport_width: f64,
        bounds: Bounds,
    ) -> GestureDecision {
        let Some(step) = direction_of(sample.delta) else {
            return GestureDecision::Cancel;
        };
        if !is_allowed(step, bounds) {
            return GestureDecision::Cancel;
        }

        let distance = sample.delta.abs();
        let far_enough =
            viewport_width > 0.0 && distance > self.config.commit_ratio * viewport_width;
        let flicked = sample.velocity.abs() > self.config.flick_velocity
            && distance > self.config.flick_min_px
            && sample.velocity.signum() == sample.delta.signum();

        if far_enough || flicked {
            GestureDecision::Commit(step)
        } else {
            GestureDecision::Cancel
        }
    }
}

/// 끈 방향에 해당하는 페이지 이동 (0이면 None)
fn direction_of(delta: f64) -> Option<isize> {
    if delta < 0.0 {
        Some(1)
    } else if delta > 0.0 {
        Some(-1)
    } else {
        None
    }
}

fn is_allowed(step: isize, bounds: Bounds) -> bool {
    if step > 0 {
        bounds.has_next
    } else {
        bounds.has_prev
    }
}
