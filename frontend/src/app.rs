use leptos::*;

use common::{AnalysisResult, StatField, TeamQuery};

use crate::{api, ActionButton, Card, RankingSection};

fn button_label(loading: bool) -> &'static str {
    if loading {
        "Analyzing..."
    } else {
        "Analyze Teams"
    }
}

#[leptos::component]
pub fn app() -> impl leptos::IntoView {
    let (team1, set_team1) = create_signal(String::new());
    let (team2, set_team2) = create_signal(String::new());
    let (results, set_results) = create_signal(None::<AnalysisResult>);

    // Only a successful response replaces `results`. A failed request is
    // logged to the console and the previous rankings stay up.
    let analyze = create_action(move |query: &TeamQuery| {
        let query = query.clone();
        async move {
            match api::analyze_teams(&query).await {
                Ok(ranked) => set_results.set(Some(ranked)),
                Err(err) => logging::error!("analysis request failed: {}", err),
            }
        }
    });
    let loading = analyze.pending();

    let style = stylers::style! {
        "App",
        .page {
            min-height: 100vh;
            padding: 32px;

            background-color: #eff2fb;
        }

        .sheet {
            max-width: 900px;
            margin-left: auto;
            margin-right: auto;
        }

        .inner {
            padding: 24px;
        }

        h1, h2 {
            text-align: center;
        }

        .inputs {
            display: flex;
            gap: 16px;

            margin-bottom: 16px;
        }
        .inputs input {
            flex: 1;
            padding: 8px 12px;

            border: solid #c5c9d4 1px;
            border-radius: 6px;
            font-size: 16px;
        }

        .categories {
            display: grid;
            grid-template-columns: repeat(3, 1fr);
            gap: 24px;

            margin-top: 24px;
        }
    };

    let sections = move || {
        results.get().map(|ranked| {
            view! {class = style,
                <div>
                    <h2>Analysis Results</h2>

                    <div class="categories">
                        <RankingSection
                            title="Top Batsmen"
                            glyph="🏏"
                            players=ranked.batsmen
                            score=StatField::BattingScore
                            average=StatField::AverageRuns
                            average_label="Average Runs"
                        />
                        <RankingSection
                            title="Top Bowlers"
                            glyph="👤"
                            players=ranked.bowlers
                            score=StatField::BowlingScore
                            average=StatField::AverageWickets
                            average_label="Average Wickets"
                        />
                        <RankingSection
                            title="Top All-Rounders"
                            glyph="🏆"
                            players=ranked.allrounders
                            score=StatField::AllRounderScore
                            average=StatField::AverageRuns
                            average_label="Average Runs"
                            split_scores=true
                        />
                    </div>
                </div>
            }
        })
    };

    view! {class = style,
        <div class="page">
            <div class="sheet">
                <Card>
                    <div class="inner">
                        <h1>Cricket Performance Analyzer</h1>

                        <div class="inputs">
                            <input
                                type="text"
                                placeholder="Enter Team 1"
                                prop:value=team1
                                on:input=move |ev| set_team1.set(event_target_value(&ev))
                            />
                            <input
                                type="text"
                                placeholder="Enter Team 2"
                                prop:value=team2
                                on:input=move |ev| set_team2.set(event_target_value(&ev))
                            />
                        </div>

                        <ActionButton
                            disabled=loading
                            on_activate=move || {
                                analyze.dispatch(TeamQuery {
                                    team1: team1.get(),
                                    team2: team2.get(),
                                });
                            }
                        >
                            { move || button_label(loading.get()) }
                        </ActionButton>

                        { sections }
                    </div>
                </Card>
            </div>
        </div>
    }
}
