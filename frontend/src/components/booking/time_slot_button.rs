use shared::{DateKey, SlotTime, SlotView};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TimeSlotButtonProps {
    pub date: DateKey,
    pub view: SlotView,
    pub on_select: Callback<(DateKey, SlotTime)>,
}

#[function_component(TimeSlotButton)]
pub fn time_slot_button(props: &TimeSlotButtonProps) -> Html {
    let view = props.view;

    let onclick = {
        let on_select = props.on_select.clone();
        let date = props.date;
        Callback::from(move |_: MouseEvent| {
            if view.selectable {
                on_select.emit((date, view.slot.time));
            }
        })
    };

    html! {
        <button
            type="button"
            class={view.appearance.css_class()}
            title={view.slot.status.label()}
            disabled={!view.selectable}
            {onclick}
        >
            {view.slot.time.to_string()}
        </button>
    }
}
