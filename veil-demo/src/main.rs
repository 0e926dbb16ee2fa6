use std::path::{Path, PathBuf};

use clap::Parser;
use dioxus::prelude::*;
use tracing::{error, info};
use veil_ui::{
    confirm_dialog, provide_confirm_bus, use_confirm_bus, use_confirm_dialog_handle,
    AlertTriangleIcon, Breakpoints, Button, ButtonSize, ButtonVariant, CheckIcon, ConfirmDialog,
    ConfirmHandle, ConfirmOptions, ConfirmResult, FooterContext, IconSpec, InfoIcon, Locale,
    XIcon,
};

/// Desktop playground for the confirm dialog.
#[derive(Parser, Debug)]
#[command(name = "veil-demo")]
struct Args {
    /// YAML file with `accept`, `reject` and `close` labels.
    #[arg(long)]
    locale: Option<PathBuf>,

    /// Tag key of the app-wide confirm dialog. Broadcasts must carry the same key.
    #[arg(long)]
    tag_key: Option<String>,
}

#[derive(Clone)]
struct DemoContext {
    tag_key: Option<String>,
}

fn configure_logging() {
    use tracing_subscriber::prelude::*;

    // Default to info level if RUST_LOG not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_line_number(true)
        .with_target(false)
        .with_file(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

fn load_locale(path: Option<&Path>) -> Locale {
    let Some(path) = path else {
        return Locale::default();
    };
    match Locale::load(path) {
        Ok(locale) => locale,
        Err(e) => {
            error!("Failed to load locale from {}: {}", path.display(), e);
            Locale::default()
        }
    }
}

fn main() {
    let args = Args::parse();
    configure_logging();

    let locale = load_locale(args.locale.as_deref());
    let context = DemoContext {
        tag_key: args.tag_key,
    };
    info!(tag_key = ?context.tag_key, "Starting veil demo");

    let config = dioxus::desktop::Config::default().with_window(
        dioxus::desktop::WindowBuilder::new()
            .with_title("veil")
            .with_inner_size(dioxus::desktop::LogicalSize::new(900, 700)),
    );

    LaunchBuilder::desktop()
        .with_cfg(config)
        .with_context_provider(move || Box::new(locale.clone()))
        .with_context_provider(move || Box::new(context.clone()))
        .launch(App);
}

#[component]
fn App() -> Element {
    let context = use_context::<DemoContext>();
    provide_confirm_bus();

    let global = ConfirmOptions {
        tag_key: context.tag_key.clone(),
        ..Default::default()
    };

    rsx! {
        main { class: "min-h-screen bg-gray-900 text-gray-100 p-8 space-y-8",
            h1 { class: "text-2xl font-semibold", "Confirm dialog" }
            BroadcastSection { tag_key: context.tag_key.clone() }
            TargetSection { tag_key: context.tag_key.clone() }
            DeclarativeSection {}
            HandleSection {}
        }
        ConfirmDialog { options: global }
    }
}

/// Options for a broadcast, tagged for the app-wide listener
fn broadcast(tag_key: &Option<String>) -> ConfirmOptions {
    match tag_key {
        Some(key) => ConfirmOptions::new().tag_key(key.clone()),
        None => ConfirmOptions::new(),
    }
}

fn warning_icon() -> IconSpec {
    IconSpec::custom(|ctx| {
        rsx! {
            AlertTriangleIcon { class: format!("{} w-6 h-6 text-amber-400", ctx.class_name) }
        }
    })
}

#[component]
fn BroadcastSection(tag_key: Option<String>) -> Element {
    let bus = use_confirm_bus();
    let status = use_signal(|| "Nothing confirmed yet".to_string());
    let mut last = use_signal(|| None::<ConfirmHandle>);

    let delete_bus = bus.clone();
    let delete_tag = tag_key.clone();
    let on_delete = move |_| {
        let handle = confirm_dialog(
            &delete_bus,
            broadcast(&delete_tag)
                .header("Delete record")
                .message("Do you want to delete this record?")
                .icon(warning_icon())
                .accept_class_name("p-button-danger")
                .accept_icon(IconSpec::custom(|ctx| {
                    rsx! { CheckIcon { class: ctx.class_name.to_string() } }
                }))
                .reject_icon(IconSpec::custom(|ctx| {
                    rsx! { XIcon { class: ctx.class_name.to_string() } }
                }))
                .breakpoints(Breakpoints::new().with("960px", "75vw").with("640px", "100vw"))
                .on_accept(move || {
                    let mut status = status;
                    status.set("Record deleted".to_string());
                })
                .on_reject(move || {
                    let mut status = status;
                    status.set("Delete cancelled".to_string());
                })
                .on_hide(|result| info!(result = ?result.map(ConfirmResult::as_str), "Delete dialog closed")),
        );
        last.set(Some(handle));
    };

    let footer_bus = bus.clone();
    let footer_tag = tag_key.clone();
    let on_custom_footer = move |_| {
        let handle = confirm_dialog(
            &footer_bus,
            broadcast(&footer_tag)
                .header("Publish")
                .message_with(|_| rsx! {
                    "Publish "
                    strong { "3 drafts" }
                    " to everyone?"
                })
                .icon(IconSpec::custom(|ctx| {
                    rsx! { InfoIcon { class: format!("{} w-6 h-6", ctx.class_name) } }
                }))
                .dismissable_mask(true)
                .footer_with(publish_footer)
                .on_accept(move || {
                    let mut status = status;
                    status.set("Drafts published".to_string());
                }),
        );
        last.set(Some(handle));
    };

    rsx! {
        section { class: "space-y-3",
            h2 { class: "text-lg font-medium", "Broadcast" }
            div { class: "flex gap-3",
                Button {
                    label: "Delete".to_string(),
                    variant: ButtonVariant::Danger,
                    onclick: on_delete,
                }
                Button { label: "Publish".to_string(), onclick: on_custom_footer }
                Button {
                    label: "Show last again".to_string(),
                    variant: ButtonVariant::Text,
                    disabled: last.read().is_none(),
                    onclick: move |_| {
                        if let Some(handle) = last.read().as_ref() {
                            handle.show(ConfirmOptions::new().header("Are you still sure?"));
                        }
                    },
                }
            }
            p { class: "text-sm text-gray-400", "{status}" }
        }
    }
}

fn publish_footer(ctx: FooterContext) -> Element {
    let accept = ctx.accept.clone();
    let reject = ctx.reject.clone();
    rsx! {
        div { class: "flex w-full justify-between",
            Button {
                label: "Not now".to_string(),
                variant: ButtonVariant::Text,
                size: ButtonSize::Small,
                onclick: move |_| reject.call(),
            }
            Button {
                label: ctx.accept_label.clone(),
                class: Some(ctx.accept_class_name.clone()),
                size: ButtonSize::Small,
                onclick: move |_| accept.call(),
            }
        }
    }
}

const ROWS: [(&str, &str); 3] = [
    ("row-1", "Quarterly report"),
    ("row-2", "Team offsite"),
    ("row-3", "Old backups"),
];

/// Each row confirms against its own target, so switching rows reshows the dialog
#[component]
fn TargetSection(tag_key: Option<String>) -> Element {
    let bus = use_confirm_bus();

    rsx! {
        section { class: "space-y-3",
            h2 { class: "text-lg font-medium", "Targets" }
            for (id, name) in ROWS {
                div { key: "{id}", id: "{id}", class: "flex items-center gap-4",
                    span { class: "w-48", "{name}" }
                    Button {
                        label: "Archive".to_string(),
                        size: ButtonSize::Small,
                        variant: ButtonVariant::Text,
                        onclick: {
                            let bus = bus.clone();
                            let tag_key = tag_key.clone();
                            move |_| {
                                confirm_dialog(
                                    &bus,
                                    broadcast(&tag_key)
                                        .target(id)
                                        .header("Archive")
                                        .message(format!("Archive \"{name}\"?"))
                                        .on_accept(move || info!(target_id = id, "Archived")),
                                );
                            }
                        },
                    }
                }
            }
        }
    }
}

/// A dialog owning its message, opened through its `visible` option
#[component]
fn DeclarativeSection() -> Element {
    let mut open = use_signal(|| false);
    let saved = use_signal(|| 0u32);

    let options = ConfirmOptions::new()
        .header("Unsaved changes")
        .message("Save changes before closing?")
        .icon(warning_icon())
        .visible(open())
        .accept_label("Save")
        .reject_label("Discard")
        .on_accept(move || {
            let mut saved = saved;
            saved += 1;
        })
        .on_hide(move |result| {
            let mut open = open;
            open.set(false);
            info!(result = ?result.map(ConfirmResult::as_str), "Editor dialog closed");
        });

    rsx! {
        section { class: "space-y-3",
            h2 { class: "text-lg font-medium", "Declarative" }
            Button { label: "Close editor".to_string(), onclick: move |_| open.set(true) }
            p { class: "text-sm text-gray-400", "Saved {saved} times" }
        }
        ConfirmDialog { options }
    }
}

/// A dialog driven through a handle held by its parent
#[component]
fn HandleSection() -> Element {
    let handle = use_confirm_dialog_handle();

    rsx! {
        section { class: "space-y-3",
            h2 { class: "text-lg font-medium", "Handle" }
            div { class: "flex gap-3 items-center",
                Button {
                    label: "Sign out".to_string(),
                    onclick: move |_| {
                        handle.confirm(
                            ConfirmOptions::new()
                                .visible(true)
                                .header("Sign out")
                                .message("Sign out of all devices?")
                                .closable(false)
                                .on_accept(|| info!("Signed out")),
                        );
                    },
                }
                if handle.is_visible() {
                    span { class: "text-sm text-gray-400", "Waiting for an answer" }
                }
            }
        }
        ConfirmDialog {
            handle: Some(handle),
            options: ConfirmOptions::new().message("Sign out?"),
        }
    }
}
