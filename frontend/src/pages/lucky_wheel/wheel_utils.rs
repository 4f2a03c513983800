use chrono::DateTime;
use lucky_shared::lucky_wheel::{DrawRecord, DrawReveal, DrawSession, Prize};
use lucky_shared::Decimal;
use yew::prelude::*;

use crate::styles;

// Format time for the campaign countdown
pub fn format_time(seconds: i64) -> String {
    let days = seconds / 86400;
    let hours = (seconds % 86400) / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    if days > 0 {
        format!("{}d {}h {}m", days, hours, minutes)
    } else if hours > 0 {
        format!("{}h {}m {}s", hours, minutes, secs)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, secs)
    } else {
        format!("{}s", secs)
    }
}

pub fn format_amount(value: Decimal, unit: &str) -> String {
    format!("{}{}", value.normalize(), unit)
}

pub fn format_record_time(created_at: i64) -> String {
    DateTime::from_timestamp(created_at, 0)
        .map(|at| at.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string())
}

// Draw button component
#[derive(Properties, PartialEq)]
pub struct DrawButtonProps {
    pub is_busy: bool,
    pub remaining_credits: u32,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(DrawButton)]
pub fn draw_button(props: &DrawButtonProps) -> Html {
    let button_text = if props.is_busy {
        "Spinning...".to_string()
    } else if props.remaining_credits == 0 {
        "No draws left".to_string()
    } else {
        format!("Draw ({} left)", props.remaining_credits)
    };

    let is_disabled = props.is_busy || props.remaining_credits == 0;

    let button_class = if is_disabled {
        "bg-gradient-to-r from-gray-400 to-gray-500 opacity-75 cursor-not-allowed text-white"
    } else {
        "bg-gradient-to-r from-yellow-400 to-orange-500 hover:from-yellow-500 hover:to-orange-600 text-white shadow-lg hover:shadow-xl transform hover:-translate-y-0.5 active:translate-y-0"
    };

    let spin_icon_class = if props.is_busy {
        "inline-block mr-2 animate-spin"
    } else {
        "hidden"
    };

    html! {
        <div class={classes!("relative", "overflow-hidden", "rounded-full", "w-full", button_class)}>
            <button
                onclick={props.onclick.clone()}
                disabled={is_disabled}
                class="relative w-full px-8 py-4 font-bold text-lg transition-all duration-300 border-2 border-transparent hover:border-white focus:outline-none focus:ring-4 focus:ring-yellow-300 focus:ring-opacity-50 bg-transparent"
            >
                <div class="flex items-center justify-center relative z-10">
                    <svg class={spin_icon_class} xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                        <circle cx="12" cy="12" r="10" />
                        <path d="M12 6v6l4 2" />
                    </svg>
                    <span>{button_text}</span>
                </div>
            </button>
        </div>
    }
}

// Result modal shown once the wheel has stopped
#[derive(Properties, PartialEq)]
pub struct ResultModalProps {
    pub reveal: Option<DrawReveal>,
    pub currency_unit: String,
    pub on_claim: Callback<MouseEvent>,
}

#[function_component(ResultModal)]
pub fn result_modal(props: &ResultModalProps) -> Html {
    let Some(reveal) = &props.reveal else {
        return html! {};
    };

    let (title, gradient_classes, animation_class) = match &reveal.prize {
        Prize::Amount { .. } => (
            format!("You won {}!", format_amount(reveal.outcome.won_amount, &props.currency_unit)),
            "from-orange-400 to-pink-500 border-orange-300",
            "animate-bounce",
        ),
        Prize::NoWin => (
            reveal.label.clone(),
            "from-gray-400 to-gray-600 border-gray-300",
            "",
        ),
    };

    html! {
        <div class="fixed inset-0 z-50 flex items-center justify-center bg-black/50 backdrop-blur-sm">
            <div class={classes!(styles::CARD, "max-w-sm", "w-full", "mx-4", "text-center")}>
                <div class={classes!(
                    "flex", "items-center", "justify-center", "px-6", "py-4", "rounded-xl",
                    "bg-gradient-to-r", "text-white", "font-bold", "text-xl", "shadow-lg", "border-2",
                    animation_class,
                    gradient_classes
                )}>
                    <span>{title}</span>
                </div>
                <p class={classes!(styles::TEXT_SMALL, "mt-4")}>
                    {format!("Total collected: {}", format_amount(reveal.outcome.cumulative_amount, &props.currency_unit))}
                </p>
                {
                    if reveal.outcome.goal_reached {
                        html! { <p class={classes!(styles::TEXT_SUCCESS, "mt-2", "font-semibold")}>{"Goal reached! Your reward is ready to withdraw."}</p> }
                    } else {
                        html! {}
                    }
                }
                <button onclick={props.on_claim.clone()} class={classes!(styles::BUTTON_PRIMARY, "mt-6", "w-full")}>
                    {if reveal.prize.is_win() { "Claim" } else { "OK" }}
                </button>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct NoCreditsPromptProps {
    pub invite_link: Option<String>,
    pub on_close: Callback<MouseEvent>,
}

#[function_component(NoCreditsPrompt)]
pub fn no_credits_prompt(props: &NoCreditsPromptProps) -> Html {
    html! {
        <div class="fixed inset-0 z-50 flex items-center justify-center bg-black/50 backdrop-blur-sm">
            <div class={classes!(styles::CARD, "max-w-sm", "w-full", "mx-4", "text-center", "space-y-4")}>
                <h3 class={styles::TEXT_H3}>{"No draws left"}</h3>
                <p class={styles::TEXT_BODY}>{"Invite friends to earn more draws."}</p>
                {
                    if let Some(link) = &props.invite_link {
                        html! {
                            <a href={link.clone()} target="_blank" rel="noopener noreferrer" class={classes!(styles::LINK, "block", "break-all", "text-sm")}>
                                {link.clone()}
                            </a>
                        }
                    } else {
                        html! {}
                    }
                }
                <button onclick={props.on_close.clone()} class={classes!(styles::BUTTON_SECONDARY, "w-full")}>
                    {"Close"}
                </button>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct CampaignSummaryProps {
    pub session: DrawSession,
    pub currency_unit: String,
    pub now_secs: i64,
}

#[function_component(CampaignSummary)]
pub fn campaign_summary(props: &CampaignSummaryProps) -> Html {
    let session = &props.session;
    let percent = session.goal_progress() * 100.0;

    html! {
        <div class={classes!(styles::CARD, "w-full", "space-y-3")}>
            <div class="flex justify-between">
                <span class={styles::TEXT_SMALL}>{"Draws remaining"}</span>
                <span class="font-semibold text-gray-900 dark:text-white">{session.remaining_credits}</span>
            </div>
            <div>
                <div class="flex justify-between mb-1">
                    <span class={styles::TEXT_SMALL}>{"Progress"}</span>
                    <span class={styles::TEXT_SMALL}>
                        {format!(
                            "{} / {}",
                            format_amount(session.cumulative_amount, &props.currency_unit),
                            format_amount(session.goal_amount, &props.currency_unit)
                        )}
                    </span>
                </div>
                <div class="w-full h-2 rounded-full bg-gray-200 dark:bg-gray-700 overflow-hidden">
                    <div
                        class="h-2 rounded-full bg-gradient-to-r from-yellow-400 to-orange-500 transition-all duration-500"
                        style={format!("width: {:.1}%", percent)}
                    />
                </div>
            </div>
            {
                match session.seconds_until_end(props.now_secs) {
                    Some(0) => html! { <p class={styles::TEXT_ERROR}>{"Campaign ended"}</p> },
                    Some(seconds) => html! {
                        <p class={styles::TEXT_SMALL}>{format!("Ends in {}", format_time(seconds))}</p>
                    },
                    None => html! {},
                }
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct DrawRecordListProps {
    pub records: Vec<DrawRecord>,
    pub currency_unit: String,
}

#[function_component(DrawRecordList)]
pub fn draw_record_list(props: &DrawRecordListProps) -> Html {
    if props.records.is_empty() {
        return html! {};
    }

    html! {
        <div class={classes!(styles::CARD, "w-full")}>
            <h3 class={classes!(styles::CARD_TITLE, "mb-3")}>{"My draws"}</h3>
            <ul class="divide-y divide-gray-100 dark:divide-gray-700">
                { for props.records.iter().map(|record| html! {
                    <li class="flex justify-between py-2">
                        <span class={styles::TEXT_SMALL}>{format_record_time(record.created_at)}</span>
                        <span class="font-medium text-gray-900 dark:text-white">
                            {format_amount(record.won_amount, &props.currency_unit)}
                        </span>
                    </li>
                }) }
            </ul>
        </div>
    }
}
