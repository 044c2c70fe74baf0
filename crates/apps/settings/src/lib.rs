//! Settings page for the bookmark browser.
//!
//! The page edits a local [`SettingsDraft`] seeded from the backend's [`UserSettings`]
//! snapshot. Nothing is written back yet: toggles only change the draft and the start-page
//! "Update" action is logged.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use browser_host::UserSettings;
use leptos::*;
use system_ui::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Locally edited copy of the editable settings fields.
pub struct SettingsDraft {
    /// Hardware acceleration toggle.
    pub gpu_acceleration_enabled: bool,
    /// Private browsing toggle.
    pub incognito: bool,
    /// Start page field contents.
    pub start_page_url: String,
}

impl SettingsDraft {
    /// Seeds a draft from a backend snapshot.
    pub fn from_snapshot(settings: &UserSettings) -> Self {
        Self {
            gpu_acceleration_enabled: settings.gpu_acceleration_enabled,
            incognito: settings.incognito,
            start_page_url: settings.start_page_url.clone(),
        }
    }

    /// Start page to commit, if the field holds more than whitespace.
    pub fn start_page_commit(&self) -> Option<&str> {
        let url = self.start_page_url.trim();
        (!url.is_empty()).then_some(url)
    }

    /// Returns whether the draft differs from `settings`.
    pub fn differs_from(&self, settings: &UserSettings) -> bool {
        *self != Self::from_snapshot(settings)
    }
}

#[component]
/// Settings page: webview toggles, start page, and the pinned-URL list.
pub fn SettingsPage(
    /// Latest backend snapshot; `None` until the first sync completes.
    #[prop(into)]
    snapshot: Signal<Option<UserSettings>>,
) -> impl IntoView {
    let draft = create_rw_signal(SettingsDraft::default());

    create_effect(move |_| {
        if let Some(settings) = snapshot.get() {
            draft.set(SettingsDraft::from_snapshot(&settings));
        }
    });

    let pinned_urls = Signal::derive(move || {
        snapshot.with(|settings| {
            settings
                .as_ref()
                .map(|settings| settings.pinned_urls.clone())
                .unwrap_or_default()
        })
    });
    let unsaved = Signal::derive(move || {
        snapshot.with(|settings| {
            settings
                .as_ref()
                .is_some_and(|settings| draft.with(|draft| draft.differs_from(settings)))
        })
    });

    let commit_start_page = move || {
        draft.with_untracked(|draft| match draft.start_page_commit() {
            Some(url) => logging::log!("start page update requested: {url}"),
            None => logging::warn!("start page update ignored: empty url"),
        });
    };

    view! {
        <Panel layout_class="settings-page" ui_slot="settings">
            <Stack gap=LayoutGap::Lg padding=LayoutPadding::Md>
                <Stack gap=LayoutGap::Sm>
                    <Heading>"Settings"</Heading>
                    <Text tone=TextTone::Secondary>"Following settings are available."</Text>
                </Stack>

                <Show
                    when=move || snapshot.with(Option::is_some)
                    fallback=|| view! { <EmptyState>"Loading settings..."</EmptyState> }
                >
                    <Panel ui_slot="webview-settings">
                        <Stack gap=LayoutGap::Sm padding=LayoutPadding::Sm>
                            <Heading role=TextRole::Label>"Webview Settings"</Heading>
                            <Text role=TextRole::Caption tone=TextTone::Secondary>
                                "These settings require a reboot."
                            </Text>
                            <FieldGroup title="Enable hardware acceleration">
                                <Switch
                                    aria_label="Enable hardware acceleration"
                                    checked=Signal::derive(move || {
                                        draft.with(|draft| draft.gpu_acceleration_enabled)
                                    })
                                    on_toggle=Callback::new(move |enabled| {
                                        draft.update(|draft| draft.gpu_acceleration_enabled = enabled)
                                    })
                                />
                            </FieldGroup>
                            <FieldGroup title="Incognito mode (Private Browsing)">
                                <Switch
                                    aria_label="Incognito mode"
                                    checked=Signal::derive(move || draft.with(|draft| draft.incognito))
                                    on_toggle=Callback::new(move |enabled| {
                                        draft.update(|draft| draft.incognito = enabled)
                                    })
                                />
                            </FieldGroup>
                            <Show when=move || unsaved.get()>
                                <Text role=TextRole::Caption tone=TextTone::Secondary>
                                    "Changes are not saved yet."
                                </Text>
                            </Show>
                        </Stack>
                    </Panel>

                    <Panel ui_slot="start-page">
                        <Stack gap=LayoutGap::Sm padding=LayoutPadding::Sm>
                            <Heading role=TextRole::Label>"Start Page"</Heading>
                            <Text role=TextRole::Caption tone=TextTone::Secondary>
                                "Open page when starting app."
                            </Text>
                            <Cluster gap=LayoutGap::Sm>
                                <TextField
                                    aria_label="Start page URL"
                                    placeholder="Enter start page url..."
                                    input_type="url"
                                    value=Signal::derive(move || {
                                        draft.with(|draft| draft.start_page_url.clone())
                                    })
                                    on_input=Callback::new(move |ev| {
                                        let url = event_target_value(&ev);
                                        draft.update(|draft| draft.start_page_url = url);
                                    })
                                    on_keydown=Callback::new(move |ev: ev::KeyboardEvent| {
                                        if ev.key() == "Enter" {
                                            ev.prevent_default();
                                            commit_start_page();
                                        }
                                    })
                                />
                                <Button
                                    variant=ButtonVariant::Primary
                                    size=ButtonSize::Sm
                                    on_click=Callback::new(move |_| commit_start_page())
                                >
                                    "Update"
                                </Button>
                            </Cluster>
                        </Stack>
                    </Panel>

                    <Panel ui_slot="pinned-urls">
                        <Stack gap=LayoutGap::Sm padding=LayoutPadding::Sm>
                            <Heading role=TextRole::Label>"Pinned to Tool Bar"</Heading>
                            <Text role=TextRole::Caption tone=TextTone::Secondary>
                                "These pages will be shown on the top toolbar."
                            </Text>
                            <Show
                                when=move || pinned_urls.with(|urls| !urls.is_empty())
                                fallback=|| view! { <EmptyState>"No pinned pages."</EmptyState> }
                            >
                                <For each=move || pinned_urls.get() key=|url| url.clone() let:url>
                                    <Cluster justify=LayoutJustify::Between ui_slot="pinned-url">
                                        <Text>{url}</Text>
                                        // Unpinning has no backend command yet.
                                        <Button variant=ButtonVariant::Danger size=ButtonSize::Sm>
                                            "Remove"
                                        </Button>
                                    </Cluster>
                                </For>
                            </Show>
                        </Stack>
                    </Panel>
                </Show>
            </Stack>
        </Panel>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn snapshot() -> UserSettings {
        UserSettings {
            gpu_acceleration_enabled: false,
            incognito: true,
            start_page_url: "https://docs.rs".to_string(),
            pinned_urls: vec!["https://crates.io".to_string()],
        }
    }

    #[test]
    fn draft_copies_editable_fields() {
        assert_eq!(
            SettingsDraft::from_snapshot(&snapshot()),
            SettingsDraft {
                gpu_acceleration_enabled: false,
                incognito: true,
                start_page_url: "https://docs.rs".to_string(),
            }
        );
    }

    #[test]
    fn local_edits_mark_draft_as_different() {
        let settings = snapshot();
        let mut draft = SettingsDraft::from_snapshot(&settings);
        assert!(!draft.differs_from(&settings));

        draft.incognito = false;

        assert!(draft.differs_from(&settings));
    }

    #[test]
    fn blank_start_page_is_not_committed() {
        let mut draft = SettingsDraft::from_snapshot(&snapshot());
        assert_eq!(draft.start_page_commit(), Some("https://docs.rs"));

        draft.start_page_url = "   ".to_string();

        assert_eq!(draft.start_page_commit(), None);
    }
}
