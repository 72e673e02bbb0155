//! SVG spark line of the current window with pointer scrubbing.

use crate::state::AppState;
use covid_data::{
    geometry::{index_at_x, polyline, spark_points, Frame},
    ScreenEvent,
};
use dioxus::prelude::*;

const WIDTH: f64 = 600.0;
const HEIGHT: f64 = 160.0;
const PADDING: f64 = 8.0;

/// Spark line in the metric's color. Moving the pointer over it focuses the
/// closest day; a vertical marker shows the focused day.
#[component]
pub fn SparkChart() -> Element {
    let state = use_context::<AppState>();
    let frame = Frame::new(WIDTH, HEIGHT, PADDING);

    let (points, color, count, marker_x) = {
        let screen = state.screen.read();
        let Some(adapter) = screen.adapter() else {
            return rsx! {};
        };
        let points = polyline(&spark_points(adapter.values(), frame));
        let focused_index = screen
            .focused()
            .and_then(|focused| adapter.window().iter().position(|r| r.date == focused.date));
        (
            points,
            adapter.metric().color(),
            adapter.value_count(),
            focused_index.map(|i| frame.x_at(i, adapter.value_count())),
        )
    };

    let on_move = move |evt: Event<MouseData>| {
        let x = evt.element_coordinates().x;
        if let Some(index) = index_at_x(x, count, frame) {
            state.dispatch(ScreenEvent::Scrubbed(index));
        }
    };

    rsx! {
        div {
            style: "width: {WIDTH}px; height: {HEIGHT}px; cursor: crosshair;",
            onmousemove: on_move,
            svg {
                style: "display: block; pointer-events: none; background: #FAFAFA; border-radius: 4px;",
                width: "{WIDTH}",
                height: "{HEIGHT}",
                view_box: "0 0 {WIDTH} {HEIGHT}",

                if let Some(x) = marker_x {
                    line {
                        x1: "{x:.2}", y1: "{PADDING}", x2: "{x:.2}", y2: "{HEIGHT - PADDING}",
                        stroke: "#BBBBBB", "stroke-width": "1",
                    }
                }

                polyline {
                    points: "{points}",
                    fill: "none",
                    stroke: "{color}",
                    "stroke-width": "2",
                    "stroke-linejoin": "round",
                    "stroke-linecap": "round",
                }
            }
        }
    }
}
