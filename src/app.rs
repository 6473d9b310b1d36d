use std::cell::RefCell;
use std::rc::Rc;

use gloo::timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::HtmlImageElement;
use yew::prelude::*;

use shaffuru_core::{scramble_seed, Board, SwapError, SwapOutcome, TileId, BOARD_SEED};

use crate::tile::TileCanvas;
use crate::{
    BOARD_HEIGHT, BOARD_WIDTH, GRID, IMAGE_SRC, SOLVED_NOTICE_DELAY_MS, SOLVED_NOTICE_TEXT,
};

#[derive(Clone, PartialEq)]
enum ImagePhase {
    Loading,
    Ready(HtmlImageElement),
    Failed,
}

// The state handle drives renders; the live mirror is what event handlers
// read and mutate, so a drop always sees the latest arrangement.
#[derive(Clone)]
struct BoardStore {
    state: UseStateHandle<Board>,
    live: Rc<RefCell<Board>>,
}

impl BoardStore {
    fn new(state: UseStateHandle<Board>, live: Rc<RefCell<Board>>) -> Self {
        Self { state, live }
    }

    fn swap(&self, a: TileId, b: TileId) -> Result<SwapOutcome, SwapError> {
        let outcome = self.live.borrow_mut().swap(a, b)?;
        self.state.set(self.live.borrow().clone());
        Ok(outcome)
    }
}

fn mount_seed() -> u32 {
    let nonce = js_sys::Date::now() as u64 as u32;
    scramble_seed(BOARD_SEED, nonce, GRID)
}

#[function_component(App)]
pub(crate) fn app() -> Html {
    let board_live = use_mut_ref(|| Board::shuffled(GRID, mount_seed()));
    let board = use_state(|| board_live.borrow().clone());
    let image_phase = use_state(|| ImagePhase::Loading);
    let pending_notice = use_mut_ref(|| None::<Timeout>);

    {
        let image_phase = image_phase.clone();
        use_effect_with((), move |_| {
            let img = HtmlImageElement::new().expect("create image element");
            let img_for_load = img.clone();
            let phase_on_load = image_phase.clone();
            let onload = Closure::<dyn FnMut()>::wrap(Box::new(move || {
                phase_on_load.set(ImagePhase::Ready(img_for_load.clone()));
            }));
            let phase_on_error = image_phase.clone();
            let onerror = Closure::<dyn FnMut()>::wrap(Box::new(move || {
                gloo::console::warn!(format!("board: failed to load image {IMAGE_SRC}"));
                phase_on_error.set(ImagePhase::Failed);
            }));
            img.set_onload(Some(onload.as_ref().unchecked_ref()));
            img.set_onerror(Some(onerror.as_ref().unchecked_ref()));
            img.set_src(IMAGE_SRC);
            onload.forget();
            onerror.forget();
            || ()
        });
    }

    let on_swap = {
        let store = BoardStore::new(board.clone(), board_live.clone());
        let pending_notice = pending_notice.clone();
        Callback::from(move |(dragged, target): (TileId, TileId)| {
            match store.swap(dragged, target) {
                Ok(outcome) => {
                    if outcome.solved {
                        let notice_slot = pending_notice.clone();
                        let handle = Timeout::new(SOLVED_NOTICE_DELAY_MS, move || {
                            notice_slot.borrow_mut().take();
                            gloo::dialogs::alert(SOLVED_NOTICE_TEXT);
                        });
                        *pending_notice.borrow_mut() = Some(handle);
                    } else {
                        // A swap that unsolves the board inside the delay
                        // window cancels the queued notice.
                        pending_notice.borrow_mut().take();
                    }
                }
                Err(err) => {
                    gloo::console::warn!(format!("board: swap rejected: {err}"));
                }
            }
        })
    };

    let content = match &*image_phase {
        ImagePhase::Loading => html! {
            <p class="board-status">{ "Loading picture..." }</p>
        },
        ImagePhase::Failed => html! {
            <p class="board-status board-error">
                { "The puzzle picture could not be loaded. Reload the page to try again." }
            </p>
        },
        ImagePhase::Ready(image) => board
            .tiles_in_slot_order()
            .map(|tile| {
                html! {
                    <TileCanvas
                        key={tile.id.to_string()}
                        id={tile.id}
                        row={tile.row}
                        col={tile.col}
                        image={image.clone()}
                        on_swap={on_swap.clone()}
                    />
                }
            })
            .collect::<Html>(),
    };

    let style = format!(
        "background-color: white; width: {BOARD_WIDTH}px; height: {BOARD_HEIGHT}px; \
         display: flex; justify-content: center; flex-wrap: wrap;"
    );
    html! {
        <main class="board" style={style}>
            {content}
        </main>
    }
}
