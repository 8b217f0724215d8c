//! Однократная отменяемая загрузка списка площадок.
//!
//! Компонент вызывает `begin()` при монтировании и оборачивает загрузку в
//! `Abortable` с полученной регистрацией. `cancel()` в `on_cleanup` прерывает
//! ожидающую загрузку: таймер сбрасывается, а будущее завершается с `Aborted`.
//! Результат проходит через `deliver()`; после отмены или повторной доставки
//! он отбрасывается, и состояние не трогается.

use futures::future::{AbortHandle, AbortRegistration};
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    Idle,
    Pending,
    Delivered,
    Cancelled,
}

impl LoadPhase {
    #[cfg(test)]
    fn from_u8(value: u8) -> Self {
        match value {
            1 => LoadPhase::Pending,
            2 => LoadPhase::Delivered,
            3 => LoadPhase::Cancelled,
            _ => LoadPhase::Idle,
        }
    }

    fn as_u8(self) -> u8 {
        match self {
            LoadPhase::Idle => 0,
            LoadPhase::Pending => 1,
            LoadPhase::Delivered => 2,
            LoadPhase::Cancelled => 3,
        }
    }
}

/// Токен загрузки; клоны разделяют одно состояние
#[derive(Debug, Clone)]
pub struct SiteLoader {
    phase: Arc<AtomicU8>,
    abort: AbortHandle,
    registration: Arc<Mutex<Option<AbortRegistration>>>,
}

impl Default for SiteLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl SiteLoader {
    pub fn new() -> Self {
        let (abort, registration) = AbortHandle::new_pair();
        Self {
            phase: Arc::new(AtomicU8::new(LoadPhase::Idle.as_u8())),
            abort,
            registration: Arc::new(Mutex::new(Some(registration))),
        }
    }

    #[cfg(test)]
    fn phase(&self) -> LoadPhase {
        LoadPhase::from_u8(self.phase.load(Ordering::Acquire))
    }

    fn transition(&self, from: LoadPhase, to: LoadPhase) -> bool {
        self.phase
            .compare_exchange(from.as_u8(), to.as_u8(), Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    /// Idle → Pending. Возвращает регистрацию для `Abortable`;
    /// `None`, если загрузка уже запускалась или отменена.
    pub fn begin(&self) -> Option<AbortRegistration> {
        if !self.transition(LoadPhase::Idle, LoadPhase::Pending) {
            return None;
        }
        self.registration.lock().ok().and_then(|mut slot| slot.take())
    }

    /// Отменяет незавершённую загрузку. Возвращает `true`, если было что отменять.
    pub fn cancel(&self) -> bool {
        let cancelled = self.transition(LoadPhase::Pending, LoadPhase::Cancelled)
            || self.transition(LoadPhase::Idle, LoadPhase::Cancelled);
        if cancelled {
            self.abort.abort();
        }
        cancelled
    }

    /// Pending → Delivered: отдаёт результат, только если загрузка ещё актуальна
    pub fn deliver<T>(&self, payload: T) -> Option<T> {
        self.transition(LoadPhase::Pending, LoadPhase::Delivered)
            .then_some(payload)
    }
}
