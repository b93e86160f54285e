use leptos::*;

use common::{PlayerRecord, StatField};

use crate::Card;

/// One ranking category: a titled card holding one inner card per player,
/// in the order the server ranked them.
#[leptos::component]
pub fn ranking_section(
    title: &'static str,
    glyph: &'static str,
    players: Vec<PlayerRecord>,
    score: StatField,
    average: StatField,
    average_label: &'static str,
    #[prop(optional)] split_scores: bool,
) -> impl leptos::IntoView {
    let style = stylers::style! {
        "RankingSection",
        .section {
            padding: 16px;
        }

        .heading {
            display: flex;
            align-items: center;
            gap: 8px;

            margin-top: 0px;
            font-size: 20px;
        }

        .players {
            display: grid;
            row-gap: 12px;
        }
    };

    let cards = players
        .into_iter()
        .map(|player| {
            view! {
                <PlayerCard player score average average_label split_scores />
            }
        })
        .collect::<Vec<_>>();

    view! {class = style,
        <Card>
            <div class="section">
                <h3 class="heading">
                    <span>{ glyph }</span>
                    <span>{ title }</span>
                </h3>
                <div class="players">
                    { cards }
                </div>
            </div>
        </Card>
    }
}

#[leptos::component]
fn player_card(
    player: PlayerRecord,
    score: StatField,
    average: StatField,
    average_label: &'static str,
    split_scores: bool,
) -> impl leptos::IntoView {
    let style = stylers::style! {
        "PlayerCard",
        .entry {
            padding: 12px 16px;
        }

        p {
            margin: 2px 0px;
        }
        .name {
            font-weight: 600;
        }
    };

    let lines = stat_lines(&player, score, average, average_label, split_scores);

    view! {class = style,
        <Card tinted=true>
            <div class="entry">
                <p class="name">{ display_name(&player) }</p>
                { lines.into_iter().map(|line| view! {class = style, <p>{ line }</p> }).collect::<Vec<_>>() }
            </div>
        </Card>
    }
}

fn display_name(player: &PlayerRecord) -> String {
    format!("{} ({})", player.name, player.team)
}

/// A stat the server did not send renders as "-" rather than being
/// dropped, so every card in a category lines up.
fn display_value(value: Option<f64>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "-".to_owned(),
    }
}

/// The stat lines of one player card, in display order. `split_scores`
/// additionally shows the two underlying scores and the wicket average,
/// which the all-rounder category wants regardless of its selectors.
fn stat_lines(
    player: &PlayerRecord,
    score: StatField,
    average: StatField,
    average_label: &'static str,
    split_scores: bool,
) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push(format!(
        "{}: {}",
        score.label(),
        display_value(score.value_of(player))
    ));

    if split_scores {
        lines.push(format!(
            "Batting Score: {}",
            display_value(player.batting_score)
        ));
        lines.push(format!(
            "Bowling Score: {}",
            display_value(player.bowling_score)
        ));
    }

    lines.push(format!(
        "{}: {}",
        average_label,
        display_value(average.value_of(player))
    ));

    if split_scores {
        lines.push(format!(
            "Average Wickets: {}",
            display_value(player.average_wickets)
        ));
    }

    lines
}
