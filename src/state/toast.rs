//! Toast notifications raised by the session service.
//!
//! The service only hands toasts to a `Notifier`; rendering belongs to the
//! application. `ToastQueue` is the stock notifier: a shared queue the UI
//! drains on each render tick.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastPosition {
    #[default]
    TopRight,
    TopCenter,
    BottomLeft,
}

impl ToastPosition {
    /// CSS class the toast container uses for this placement.
    pub fn class(self) -> &'static str {
        match self {
            Self::TopRight => "toast-top-right",
            Self::TopCenter => "toast-top-center",
            Self::BottomLeft => "toast-bottom-left",
        }
    }
}

/// Display options for a single toast.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToastOptions {
    pub position: ToastPosition,
    /// Time before auto-dismiss.
    pub timeout: Duration,
    /// Extra time after the pointer leaves a hovered toast.
    pub extended_timeout: Duration,
    pub close_button: bool,
    pub progress_bar: bool,
    pub tap_to_dismiss: bool,
    /// Render `message` as HTML instead of text.
    pub enable_html: bool,
}

impl Default for ToastOptions {
    fn default() -> Self {
        Self {
            position: ToastPosition::default(),
            timeout: Duration::from_millis(5000),
            extended_timeout: Duration::from_millis(1000),
            close_button: false,
            progress_bar: false,
            tap_to_dismiss: true,
            enable_html: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub title: String,
    pub message: String,
    pub options: ToastOptions,
}

impl Toast {
    /// Privacy and cookie notice shown before every login attempt.
    pub fn privacy_notice() -> Self {
        Self {
            kind: ToastKind::Info,
            title: "Aviso de privacidad y cookies".to_owned(),
            message: "Al continuar, aceptas nuestras políticas y uso de cookies.".to_owned(),
            options: ToastOptions {
                position: ToastPosition::BottomLeft,
                timeout: Duration::from_millis(8000),
                extended_timeout: Duration::ZERO,
                close_button: true,
                progress_bar: true,
                tap_to_dismiss: true,
                enable_html: false,
            },
        }
    }

    pub fn welcome(role: &str, first_name: &str) -> Self {
        Self {
            kind: ToastKind::Success,
            title: format!("👋 Bienvenido, {first_name}!"),
            message: format!(
                "Ha iniciado sesión correctamente como {role} usuario de MethaSoft. \
                 Ahora puedes empezar a explorar. ¡Disfrutar! 🎉"
            ),
            options: ToastOptions { close_button: true, ..ToastOptions::default() },
        }
    }

    /// Goodbye toast; `time` is the already formatted logout time.
    pub fn goodbye(time: &str) -> Self {
        Self {
            kind: ToastKind::Info,
            title: "¡Adiós!".to_owned(),
            message: format!(
                "<span>Sesión cerrada de forma segura.</span><br/><small>Solicitud realizada a las {time}</small>"
            ),
            options: ToastOptions {
                position: ToastPosition::TopCenter,
                timeout: Duration::from_millis(8000),
                extended_timeout: Duration::ZERO,
                close_button: true,
                progress_bar: true,
                tap_to_dismiss: false,
                enable_html: true,
            },
        }
    }
}

/// Receives toasts; implementations must not block.
pub trait Notifier {
    fn notify(&self, toast: Toast);
}

/// Shared FIFO of pending toasts. Clones share the queue.
#[derive(Clone, Default)]
pub struct ToastQueue {
    pending: Rc<RefCell<Vec<Toast>>>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.pending.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.borrow().is_empty()
    }

    /// Copy of the pending toasts, oldest first.
    pub fn snapshot(&self) -> Vec<Toast> {
        self.pending.borrow().clone()
    }

    /// Remove and return all pending toasts, oldest first.
    pub fn drain(&self) -> Vec<Toast> {
        std::mem::take(&mut *self.pending.borrow_mut())
    }
}

impl Notifier for ToastQueue {
    fn notify(&self, toast: Toast) {
        log::debug!("toast queued: {}", toast.title);
        self.pending.borrow_mut().push(toast);
    }
}
