/// Reusable form controls for the popup

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    pub name: AttrValue,
    pub onclick: Callback<MouseEvent>,
    pub children: Children,
    #[prop_or(false)]
    pub disabled: bool,
    #[prop_or(false)]
    pub hidden: bool,
    #[prop_or_default]
    pub variant: ButtonVariant,
}

#[derive(PartialEq, Clone, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
}

#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    let base_style = "padding: 8px 16px; border: none; border-radius: 4px; font-size: 14px; cursor: pointer; font-weight: 500;";

    let variant_style = match props.variant {
        ButtonVariant::Primary => "background-color: #5B4FE8; color: white;",
        ButtonVariant::Secondary => "background-color: #e0e0e0; color: #333;",
    };

    let disabled_style = if props.disabled {
        "opacity: 0.5; cursor: not-allowed;"
    } else {
        ""
    };

    let display_style = if props.hidden { "display: none;" } else { "" };

    let style = format!("{} {} {} {}", base_style, variant_style, disabled_style, display_style);

    html! {
        <button
            name={props.name.clone()}
            onclick={props.onclick.clone()}
            disabled={props.disabled}
            style={style}
        >
            {props.children.clone()}
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct CheckboxProps {
    pub name: AttrValue,
    pub label: AttrValue,
    pub checked: bool,
    pub onchange: Callback<bool>,
}

/// Labelled checkbox reporting its new state on `change`
#[function_component(Checkbox)]
pub fn checkbox(props: &CheckboxProps) -> Html {
    let onchange = {
        let onchange = props.onchange.clone();
        Callback::from(move |e: Event| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                onchange.emit(input.checked());
            }
        })
    };

    html! {
        <label class="checkbox-label">
            <input
                type="checkbox"
                name={props.name.clone()}
                checked={props.checked}
                {onchange}
            />
            {props.label.clone()}
        </label>
    }
}

#[derive(Properties, PartialEq)]
pub struct TextInputProps {
    pub name: AttrValue,
    pub value: AttrValue,
    pub oninput: Callback<String>,
    #[prop_or_default]
    pub placeholder: AttrValue,
}

#[function_component(TextInput)]
pub fn text_input(props: &TextInputProps) -> Html {
    let oninput = {
        let oninput = props.oninput.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                oninput.emit(input.value());
            }
        })
    };

    html! {
        <input
            type="text"
            class="filter-input"
            name={props.name.clone()}
            placeholder={props.placeholder.clone()}
            value={props.value.clone()}
            {oninput}
        />
    }
}

#[derive(Properties, PartialEq)]
pub struct TextAreaProps {
    pub name: AttrValue,
    pub value: AttrValue,
    pub oninput: Callback<String>,
    #[prop_or(20)]
    pub rows: u32,
}

#[function_component(TextArea)]
pub fn text_area(props: &TextAreaProps) -> Html {
    let oninput = {
        let oninput = props.oninput.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(area) = e.target_dyn_into::<web_sys::HtmlTextAreaElement>() {
                oninput.emit(area.value());
            }
        })
    };

    html! {
        <textarea
            class="scratchpad"
            name={props.name.clone()}
            rows={props.rows.to_string()}
            spellcheck="false"
            value={props.value.clone()}
            {oninput}
        />
    }
}
