mod wheel_canvas;
mod wheel_utils;

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use lucky_shared::lucky_wheel::{DrawError, DrawOrchestrator, DrawRecord, DrawReveal, DrawSession};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::HttpDrawService;
use crate::config::{get_api_base_url, wheel_config};
use crate::styles;

use wheel_canvas::{CanvasPresenter, WheelCanvas};
use wheel_utils::{CampaignSummary, DrawButton, DrawRecordList, NoCreditsPrompt, ResultModal};

type Orchestrator = DrawOrchestrator<HttpDrawService, CanvasPresenter>;

fn now_secs() -> i64 {
    (js_sys::Date::now() / 1000.0) as i64
}

#[function_component(LuckyWheel)]
pub fn lucky_wheel() -> Html {
    let orchestrator = use_state(|| None::<Rc<Orchestrator>>);
    let rotation = use_state(|| 0.0_f64);
    let is_spinning = use_state(|| false);
    let reveal = use_state(|| None::<DrawReveal>);
    let error_message = use_state(|| None::<String>);
    // Outer `Some` opens the prompt; the inner value is the invite link
    let no_credits = use_state(|| None::<Option<String>>);
    let session = use_state(|| None::<DrawSession>);
    let records = use_state(Vec::<DrawRecord>::new);
    let loading = use_state(|| true);
    let now = use_state(now_secs);
    let mounted = use_mut_ref(|| None::<(Rc<Orchestrator>, CanvasPresenter)>);

    // Load the campaign and build the wheel
    {
        let orchestrator = orchestrator.clone();
        let rotation = rotation.setter();
        let error_message = error_message.clone();
        let session = session.clone();
        let records = records.clone();
        let loading = loading.clone();
        let mounted = mounted.clone();

        use_effect_with((), move |_| {
            let alive = Rc::new(Cell::new(true));
            let presenter = CanvasPresenter::new(Callback::from(move |degrees: f64| rotation.set(degrees)));

            {
                let alive = alive.clone();
                let mounted = mounted.clone();
                let presenter = presenter.clone();
                spawn_local(async move {
                    let service = HttpDrawService::new(get_api_base_url());
                    match Orchestrator::load(service, presenter.clone(), wheel_config()).await {
                        Ok(loaded) => {
                            let loaded = Rc::new(loaded);
                            if !alive.get() {
                                loaded.teardown();
                                presenter.detach();
                                return;
                            }
                            *mounted.borrow_mut() = Some((loaded.clone(), presenter));
                            session.set(Some(loaded.session()));
                            orchestrator.set(Some(loaded.clone()));
                            loading.set(false);

                            match loaded.refresh_records().await {
                                Ok(()) => records.set(loaded.records()),
                                Err(e) => log::warn!("Could not load draw records: {}", e),
                            }
                        }
                        Err(e) => {
                            log::error!("Failed to load lucky wheel: {}", e);
                            if alive.get() {
                                error_message.set(e.user_message());
                                loading.set(false);
                            }
                        }
                    }
                });
            }

            move || {
                alive.set(false);
                if let Some((orchestrator, presenter)) = mounted.borrow_mut().take() {
                    orchestrator.teardown();
                    presenter.detach();
                }
            }
        });
    }

    // Campaign countdown
    {
        let now = now.clone();
        use_effect_with((), move |_| {
            let interval = Interval::new(1000, move || now.set(now_secs()));
            move || drop(interval)
        });
    }

    let on_draw = {
        let orchestrator = orchestrator.clone();
        let is_spinning = is_spinning.clone();
        let reveal = reveal.clone();
        let error_message = error_message.clone();
        let no_credits = no_credits.clone();
        let session = session.clone();
        let records = records.clone();

        Callback::from(move |_: MouseEvent| {
            let Some(orchestrator) = (*orchestrator).clone() else {
                return;
            };
            if !orchestrator.can_draw() {
                return;
            }

            is_spinning.set(true);
            error_message.set(None);

            let is_spinning = is_spinning.clone();
            let reveal = reveal.clone();
            let error_message = error_message.clone();
            let no_credits = no_credits.clone();
            let session = session.clone();
            let records = records.clone();
            spawn_local(async move {
                let result = orchestrator.draw().await;
                if matches!(result, Err(DrawError::Busy) | Err(DrawError::TornDown)) {
                    return;
                }

                is_spinning.set(false);
                session.set(Some(orchestrator.session()));
                match result {
                    Ok(result) => reveal.set(Some(result)),
                    Err(DrawError::NoCredits { invite_link }) => no_credits.set(Some(invite_link)),
                    Err(e) => error_message.set(e.user_message()),
                }

                // History reloads after the result is already on screen
                match orchestrator.refresh_records().await {
                    Ok(()) => records.set(orchestrator.records()),
                    Err(DrawError::TornDown) => {}
                    Err(e) => log::warn!("Could not refresh draw records: {}", e),
                }
            });
        })
    };

    let on_claim = {
        let orchestrator = orchestrator.clone();
        let reveal = reveal.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(orchestrator) = (*orchestrator).as_ref() {
                orchestrator.acknowledge();
            }
            reveal.set(None);
        })
    };

    let on_close_no_credits = {
        let no_credits = no_credits.clone();
        Callback::from(move |_: MouseEvent| no_credits.set(None))
    };

    let currency_unit = (*orchestrator)
        .as_ref()
        .map(|o| o.config().currency_unit.clone())
        .unwrap_or_else(|| wheel_config().currency_unit);

    html! {
        <div class={styles::CONTAINER}>
            <div class="max-w-md mx-auto py-8 flex flex-col items-center space-y-6">
                <h1 class={styles::TEXT_H1}>{"Lucky Wheel"}</h1>

                {
                    if let Some(message) = (*error_message).clone() {
                        html! { <div class={classes!(styles::CARD_ERROR, "w-full", "text-center")}>{message}</div> }
                    } else {
                        html! {}
                    }
                }

                {
                    if *loading {
                        html! {
                            <div class="flex justify-center py-24">
                                <svg class={styles::LOADING_SPINNER} xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24">
                                    <circle class="opacity-25" cx="12" cy="12" r="10" stroke="currentColor" stroke-width="4"></circle>
                                    <path class="opacity-75" fill="currentColor" d="M4 12a8 8 0 018-8V0C5.373 0 0 5.373 0 12h4z"></path>
                                </svg>
                            </div>
                        }
                    } else if let Some(wheel) = (*orchestrator).as_ref() {
                        let labels = wheel.catalog().labels().into_iter().map(str::to_string).collect::<Vec<_>>();
                        let remaining = (*session).as_ref().map(|s| s.remaining_credits).unwrap_or(0);
                        html! {
                            <>
                                <WheelCanvas
                                    rotation={*rotation}
                                    is_spinning={*is_spinning}
                                    labels={labels}
                                    no_win_index={wheel.catalog().no_win_index()}
                                    highlight={(*reveal).as_ref().map(|r| r.wedge_index)}
                                />
                                <div class="w-64">
                                    <DrawButton
                                        is_busy={*is_spinning || reveal.is_some()}
                                        remaining_credits={remaining}
                                        onclick={on_draw}
                                    />
                                </div>
                                {
                                    match (*session).as_ref().filter(|s| !s.has_credits()).and_then(|s| s.invite_link.clone()) {
                                        Some(link) if !*is_spinning => html! {
                                            <a href={link} target="_blank" rel="noopener noreferrer" class={classes!(styles::LINK, "text-sm")}>
                                                {"Invite friends to earn more draws"}
                                            </a>
                                        },
                                        _ => html! {},
                                    }
                                }
                                {
                                    if let Some(current) = (*session).clone() {
                                        html! {
                                            <CampaignSummary
                                                session={current}
                                                currency_unit={currency_unit.clone()}
                                                now_secs={*now}
                                            />
                                        }
                                    } else {
                                        html! {}
                                    }
                                }
                                <DrawRecordList records={(*records).clone()} currency_unit={currency_unit.clone()} />
                            </>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>

            <ResultModal reveal={(*reveal).clone()} currency_unit={currency_unit.clone()} on_claim={on_claim} />
            {
                if let Some(invite_link) = (*no_credits).clone() {
                    html! { <NoCreditsPrompt invite_link={invite_link} on_close={on_close_no_credits} /> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
