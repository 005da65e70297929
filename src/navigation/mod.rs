//! 페이지/버전 이동 상태 기계
//!
//! - `state`: 위치와 범위 검사 (즉시 반영)
//! - `transition`: 전환 스타일, 전환 중 보호
//! - `gesture`: 드래그 → 이동 판정
//! - `controller`: 위 세 가지를 묶은 입력 처리

mod controller;
mod gesture;
mod state;
mod transition;

pub use controller::{GestureOutcome, PageController, PendingTransition};
pub use gesture::{Bounds, GestureConfig, GestureDecision, GesturePolicy, GestureSample};
pub use state::{NavigationState, Navigator};
pub use transition::{SettleGuard, Transition, TransitionStyle, TransitionToken};
