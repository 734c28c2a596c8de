/// Popup UI: filter, scratchpad and open buttons

use std::rc::Rc;

use patternfly_yew::prelude::Spinner;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::controller::{PopupController, RefreshRequest};
use crate::scratchpad::has_urls;
use crate::ui::components::{Button, ButtonVariant, Checkbox, TextArea, TextInput};

#[derive(Properties)]
pub struct AppProps {
    pub controller: Rc<PopupController>,
}

impl PartialEq for AppProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.controller, &other.controller)
    }
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let filter = use_state(String::new);
    let scratchpad = use_state(String::new);
    let include_title = use_state(|| false);
    let include_other_windows = use_state(|| false);
    let refreshing = use_state(|| false);

    // Re-render the scratchpad on mount and whenever the filter or a flag changes
    {
        let controller = props.controller.clone();
        let scratchpad = scratchpad.clone();
        let refreshing = refreshing.clone();
        let request = RefreshRequest {
            filter: (*filter).clone(),
            include_title: *include_title,
            include_other_windows: *include_other_windows,
        };

        use_effect_with(request, move |request| {
            let request = request.clone();
            refreshing.set(true);

            spawn_local(async move {
                match controller.refresh_scratchpad(&request).await {
                    Ok(text) => scratchpad.set(text),
                    Err(e) => log::error!("Failed to refresh scratchpad: {}", e),
                }
                refreshing.set(false);
            });
            || ()
        });
    }

    let on_filter_input = {
        let filter = filter.clone();
        Callback::from(move |value: String| filter.set(value))
    };

    let on_scratchpad_input = {
        let scratchpad = scratchpad.clone();
        Callback::from(move |value: String| scratchpad.set(value))
    };

    let on_include_title = {
        let include_title = include_title.clone();
        Callback::from(move |checked: bool| include_title.set(checked))
    };

    let on_include_other_windows = {
        let include_other_windows = include_other_windows.clone();
        Callback::from(move |checked: bool| include_other_windows.set(checked))
    };

    // Open handler factory, one per button
    let on_open = {
        let controller = props.controller.clone();
        let scratchpad = scratchpad.clone();
        move |discarded: bool| {
            let controller = controller.clone();
            let scratchpad = scratchpad.clone();
            Callback::from(move |_: MouseEvent| {
                let controller = controller.clone();
                let text = (*scratchpad).clone();

                spawn_local(async move {
                    for outcome in controller.open_urls(&text, discarded).await {
                        if let Err(e) = outcome.result {
                            log::warn!("Failed to open {}: {}", outcome.url, e);
                        }
                    }
                });
            })
        }
    };

    let can_open = has_urls(&scratchpad);
    let supports_discarded = props.controller.supports_discarded();

    html! {
        <div class="padding-20">
            <h1 class="popup-title">{"Tab Scratchpad"}</h1>

            <TextInput
                name="filter"
                placeholder="Filter URLs (all words must match)"
                value={(*filter).clone()}
                oninput={on_filter_input}
            />

            <div class="options-row">
                <Checkbox
                    name="include-title"
                    label="Include title"
                    checked={*include_title}
                    onchange={on_include_title}
                />
                <Checkbox
                    name="include-other-windows"
                    label="Include other windows"
                    checked={*include_other_windows}
                    onchange={on_include_other_windows}
                />
                if *refreshing {
                    <Spinner />
                }
            </div>

            <TextArea
                name="scratchpad"
                value={(*scratchpad).clone()}
                oninput={on_scratchpad_input}
            />

            <div class="button-row">
                <Button name="open-in-tabs" onclick={on_open(false)} disabled={!can_open}>
                    {"Open in tabs"}
                </Button>
                <Button
                    name="open-in-discarded-tabs"
                    onclick={on_open(true)}
                    disabled={!can_open}
                    hidden={!supports_discarded}
                    variant={ButtonVariant::Secondary}
                >
                    {"Open in discarded tabs"}
                </Button>
            </div>
        </div>
    }
}
