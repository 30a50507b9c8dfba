//! Transient outcome notifications, provided app-wide as a context signal.
//!
//! Every result the screen produces — success or failure — surfaces here;
//! nothing renders inline error text. [`ToastProvider`] owns the signal and
//! the stack's markup; callers reach the sink with [`use_toasts`] and
//! [`push_toast`].

use dioxus::prelude::*;

const TOAST_CSS: Asset = asset!("/assets/toast.css");

/// How long a toast stays on screen.
#[cfg(target_arch = "wasm32")]
const TOAST_SECS: u64 = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
}

/// The live toast stack plus the id source for new entries.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Toasts {
    entries: Vec<Toast>,
    next_id: u64,
}

impl Toasts {
    pub fn entries(&self) -> &[Toast] {
        &self.entries
    }

    fn push(&mut self, level: ToastLevel, message: String) -> u64 {
        self.next_id += 1;
        self.entries.push(Toast {
            id: self.next_id,
            level,
            message,
        });
        self.next_id
    }

    fn dismiss(&mut self, id: u64) {
        self.entries.retain(|t| t.id != id);
    }
}

/// Get the toast sink installed by [`ToastProvider`].
pub fn use_toasts() -> Signal<Toasts> {
    use_context::<Signal<Toasts>>()
}

/// Append a toast and schedule its dismissal.
pub fn push_toast(toasts: &mut Signal<Toasts>, level: ToastLevel, message: impl Into<String>) {
    let id = toasts.write().push(level, message.into());
    auto_dismiss(*toasts, id);
}

#[cfg(target_arch = "wasm32")]
fn auto_dismiss(mut toasts: Signal<Toasts>, id: u64) {
    spawn(async move {
        gloo_timers::future::sleep(std::time::Duration::from_secs(TOAST_SECS)).await;
        toasts.write().dismiss(id);
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn auto_dismiss(_toasts: Signal<Toasts>, _id: u64) {
    // No timer off-web; entries stay until clicked away.
}

/// Provides the toast signal and renders the live stack above the app.
/// Wrap the router with this component.
#[component]
pub fn ToastProvider(children: Element) -> Element {
    use_context_provider(|| Signal::new(Toasts::default()));

    rsx! {
        document::Stylesheet { href: TOAST_CSS }
        {children}
        ToastHost {}
    }
}

#[component]
fn ToastHost() -> Element {
    let mut toasts = use_toasts();
    let entries = toasts().entries().to_vec();

    if entries.is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "toast-stack",
            for toast in entries {
                div {
                    key: "{toast.id}",
                    class: match toast.level {
                        ToastLevel::Success => "toast success",
                        ToastLevel::Error => "toast error",
                    },
                    onclick: move |_| toasts.write().dismiss(toast.id),
                    "{toast.message}"
                }
            }
        }
    }
}
