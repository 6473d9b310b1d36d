use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, DragEvent, HtmlCanvasElement, HtmlImageElement};
use yew::prelude::*;

use shaffuru_core::TileId;

use crate::{GRID, TILE_HEIGHT, TILE_WIDTH};

const DRAG_PAYLOAD_FORMAT: &str = "text/plain";

#[derive(Properties, PartialEq)]
pub(crate) struct TileCanvasProps {
    pub(crate) id: TileId,
    pub(crate) row: u32,
    pub(crate) col: u32,
    pub(crate) image: HtmlImageElement,
    pub(crate) on_swap: Callback<(TileId, TileId)>,
}

// Sub-rectangle of the source image belonging to the tile at (col, row),
// in the image's natural coordinates.
pub(crate) fn source_rect(
    image_width: f64,
    image_height: f64,
    col: u32,
    row: u32,
) -> (f64, f64, f64, f64) {
    let cell_width = image_width / GRID as f64;
    let cell_height = image_height / GRID as f64;
    (
        col as f64 * cell_width,
        row as f64 * cell_height,
        cell_width,
        cell_height,
    )
}

pub(crate) fn parse_drag_payload(payload: &str) -> Option<TileId> {
    payload.trim().parse::<TileId>().ok()
}

#[function_component(TileCanvas)]
pub(crate) fn tile_canvas(props: &TileCanvasProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with(
            (props.col, props.row, props.image.clone()),
            move |(col, row, image)| {
                draw_tile(&canvas_ref, image, *col, *row);
                || ()
            },
        );
    }

    let on_drag_start = {
        let id = props.id;
        Callback::from(move |event: DragEvent| {
            let Some(transfer) = event.data_transfer() else {
                return;
            };
            if transfer
                .set_data(DRAG_PAYLOAD_FORMAT, &id.to_string())
                .is_err()
            {
                gloo::console::warn!(format!("tile: drag payload rejected for tile {id}"));
            }
        })
    };

    let on_drag_over = Callback::from(|event: DragEvent| {
        // Without this the browser refuses the drop.
        event.prevent_default();
    });

    let on_drop = {
        let id = props.id;
        let on_swap = props.on_swap.clone();
        Callback::from(move |event: DragEvent| {
            event.prevent_default();
            let payload = event
                .data_transfer()
                .and_then(|transfer| transfer.get_data(DRAG_PAYLOAD_FORMAT).ok())
                .unwrap_or_default();
            match parse_drag_payload(&payload) {
                Some(dragged) => on_swap.emit((dragged, id)),
                None => {
                    gloo::console::warn!(format!("tile: ignoring drop with payload {payload:?}"));
                }
            }
        })
    };

    html! {
        <canvas
            class="tile"
            ref={canvas_ref}
            width={TILE_WIDTH.to_string()}
            height={TILE_HEIGHT.to_string()}
            draggable="true"
            ondragstart={on_drag_start}
            ondragover={on_drag_over}
            ondrop={on_drop}
        />
    }
}

fn draw_tile(canvas_ref: &NodeRef, image: &HtmlImageElement, col: u32, row: u32) {
    let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() else {
        return;
    };
    let ctx = match canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
    {
        Some(ctx) => ctx,
        None => {
            gloo::console::warn!("tile: no 2d context for tile canvas");
            return;
        }
    };
    let width = TILE_WIDTH as f64;
    let height = TILE_HEIGHT as f64;
    let (sx, sy, sw, sh) = source_rect(
        image.natural_width() as f64,
        image.natural_height() as f64,
        col,
        row,
    );
    ctx.clear_rect(0.0, 0.0, width, height);
    if ctx
        .draw_image_with_html_image_element_and_sw_and_sh_and_dx_and_dy_and_dw_and_dh(
            image, sx, sy, sw, sh, 0.0, 0.0, width, height,
        )
        .is_err()
    {
        gloo::console::warn!(format!("tile: draw failed for tile at col {col} row {row}"));
        return;
    }
    ctx.stroke_rect(0.0, 0.0, width, height);
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn source_rect_scales_with_the_natural_size() {
        let (sx, sy, sw, sh) = source_rect(600.0, 300.0, 2, 1);
        assert_eq!(sx, 400.0);
        assert_eq!(sy, 100.0);
        assert_eq!(sw, 200.0);
        assert_eq!(sh, 100.0);
    }

    #[wasm_bindgen_test]
    fn drag_payload_accepts_tile_ids_only() {
        assert_eq!(parse_drag_payload("7"), Some(7));
        assert_eq!(parse_drag_payload(" 3 "), Some(3));
        assert_eq!(parse_drag_payload(""), None);
        assert_eq!(parse_drag_payload("pineapple"), None);
        assert_eq!(parse_drag_payload("-1"), None);
    }
}
