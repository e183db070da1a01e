use super::time_slot_button::TimeSlotButton;
use shared::{CalendarDayView, DateKey, SlotTime};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DayCellProps {
    pub day: CalendarDayView,
    pub on_select: Callback<(DateKey, SlotTime)>,
}

/// One day of the booking calendar with its slot buttons
#[function_component(DayCell)]
pub fn day_cell(props: &DayCellProps) -> Html {
    let day = &props.day;

    html! {
        <div class={classes!(day.classes())} data-date={day.date.to_string()}>
            <div class="day-label">{&day.label}</div>
            <div class="day-slots">
                {for day.slots.iter().map(|view| html! {
                    <TimeSlotButton
                        key={view.slot.time.to_string()}
                        date={day.date}
                        view={*view}
                        on_select={props.on_select.clone()}
                    />
                })}
            </div>
        </div>
    }
}
