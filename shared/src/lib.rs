#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::must_use_candidate)]

pub mod capabilities;
pub mod chat;
pub mod config;
pub mod event;
pub mod fixtures;
pub mod model;
pub mod navigation;
pub mod remote;
pub mod responder;
pub mod view;

pub use app::App;
pub use capabilities::{Capabilities, Effect};
pub use chat::{ChatPhase, ChatSession, ConversationTurn, RemoteCallFailure, RequestId, Role};
pub use config::{ConciergeConfig, ConfigError};
pub use crux_core::{render::Render, App as CruxApp};
pub use event::{AddItemOrigin, Event};
pub use model::Model;
pub use navigation::{ScreenId, SelectionParams, Tab};
pub use responder::ResponseScript;
pub use view::{ChatView, ScreenView, ViewModel};

pub mod app {
    use tracing::{debug, info, warn};

    use crate::capabilities::Capabilities;
    use crate::chat::{ChatSession, PendingSend, RemoteCallFailure};
    use crate::event::{AddItemOrigin, Event};
    use crate::model::Model;
    use crate::navigation::{ScreenId, SelectionParams};
    use crate::remote::{self, GenerateContentRequest, API_KEY_HEADER};
    use crate::view::ViewModel;

    #[derive(Default)]
    pub struct App;

    impl App {
        /// Moves the draft into the log and asks for a reply.
        ///
        /// Without an API key the scripted answer is given immediately and no request goes out.
        fn submit_chat(model: &mut Model, caps: &Capabilities) {
            let Some(PendingSend {
                request_id, history, ..
            }) = model.chat.as_mut().and_then(ChatSession::submit)
            else {
                return;
            };

            let Some(api_key) = model.config.api_key().map(str::to_owned) else {
                debug!(%request_id, "no api key configured, answering from script");
                model.resolve_chat(request_id, Err(RemoteCallFailure::MissingCredentials));
                return;
            };

            let body = GenerateContentRequest::from_turns(&history);
            let request = caps
                .http()
                .post(model.config.completion_url())
                .header(API_KEY_HEADER, api_key.as_str())
                .body_json(&body);

            match request {
                Ok(builder) => {
                    info!(%request_id, model = %model.config.model, turns = history.len(), "requesting advisor reply");
                    builder.send(move |result| Event::RemoteReplyReceived {
                        request_id,
                        outcome: Box::new(remote::outcome_from_http(result)),
                    });
                }
                Err(e) => {
                    warn!(%request_id, error = %e, "could not encode advisor request");
                    model.resolve_chat(request_id, Err(RemoteCallFailure::Transport(e.to_string())));
                }
            }
        }

        fn tick_chat(model: &mut Model) -> bool {
            let timeout_ticks = model.config.timeout_ticks();
            let Some(request_id) = model.chat.as_mut().and_then(|chat| chat.tick(timeout_ticks)) else {
                return false;
            };

            warn!(%request_id, timeout_secs = model.config.remote_timeout_secs, "advisor reply timed out");
            model
                .resolve_chat(request_id, Err(RemoteCallFailure::Timeout))
                .is_some()
        }

        fn enter_access_code(model: &mut Model, code: &str) {
            if code.trim().chars().count() < crate::config::ACCESS_CODE_LEN {
                model.login_error = false;
                return;
            }

            if model.config.accepts_access_code(code) {
                model.login_error = false;
                info!("access code accepted");
                model.navigator.navigate(ScreenId::Home, SelectionParams::none());
            } else {
                model.login_error = true;
                warn!("access code rejected");
            }
        }
    }

    impl crux_core::App for App {
        type Event = Event;
        type Model = Model;
        type ViewModel = ViewModel;
        type Capabilities = Capabilities;

        fn update(&self, event: Event, model: &mut Model, caps: &Capabilities) {
            let event_name = event.name();
            if event.is_user_initiated() {
                debug!(event = event_name, screen = %model.navigator.active_screen(), "user action");
            }

            match event {
                Event::Noop => {}

                Event::AppStarted => {
                    info!(
                        screen = %model.navigator.active_screen(),
                        remote_enabled = model.config.api_key().is_some(),
                        "app started"
                    );
                    caps.render().render();
                }

                Event::Configure(config) => {
                    if let Err(e) = model.apply_config(*config) {
                        warn!(error = %e, "configuration rejected, keeping previous");
                    }
                    caps.render().render();
                }

                Event::Navigate { screen, params } => {
                    model.navigator.navigate(screen, params);
                    caps.render().render();
                }

                Event::GoBack => {
                    model.navigator.go_back();
                    caps.render().render();
                }

                Event::ToggleChat => {
                    model.toggle_chat();
                    caps.render().render();
                }

                Event::ChatDraftChanged { text } => {
                    if let Some(chat) = model.chat.as_mut() {
                        chat.set_draft(text);
                        caps.render().render();
                    }
                }

                Event::ChatSubmitted => {
                    Self::submit_chat(model, caps);
                    caps.render().render();
                }

                Event::RemoteReplyReceived {
                    request_id,
                    outcome,
                } => {
                    if model.resolve_chat(request_id, *outcome).is_some() {
                        caps.render().render();
                    }
                }

                Event::TimerTick => {
                    if Self::tick_chat(model) {
                        caps.render().render();
                    }
                }

                Event::LoginCodeEntered { code } => {
                    Self::enter_access_code(model, &code);
                    caps.render().render();
                }

                Event::WardrobeCurated { name, location } => {
                    match model.curate_wardrobe(&name, location.as_deref()) {
                        Ok(id) => model
                            .navigator
                            .navigate(ScreenId::WardrobeDetail, SelectionParams::wardrobe(id)),
                        Err(e) => warn!(error = %e, "wardrobe not curated"),
                    }
                    caps.render().render();
                }

                Event::ItemAdded { product_id, origin } => {
                    match model.add_item_to_selected(&product_id) {
                        Ok(wardrobe_id) => match origin {
                            AddItemOrigin::Scan => model.navigator.navigate(
                                ScreenId::WardrobeDetail,
                                SelectionParams::wardrobe(wardrobe_id),
                            ),
                            AddItemOrigin::Catalog => model.navigator.go_back(),
                        },
                        Err(e) => warn!(error = %e, ?origin, "item not added"),
                    }
                    caps.render().render();
                }

                Event::EventRsvp { event_id, status } => {
                    if let Err(e) = model.set_rsvp(&event_id, status) {
                        warn!(error = %e, "rsvp not recorded");
                    }
                    caps.render().render();
                }
            }
        }

        fn view(&self, model: &Model) -> ViewModel {
            ViewModel::project(model)
        }
    }
}
