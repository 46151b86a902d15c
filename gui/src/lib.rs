pub mod state;

use iced::widget::{
    button, column, container, pick_list, progress_bar, radio, row, scrollable, text,
    text_input, Column,
};
use iced::{Alignment, Command, Element, Length, Theme};
use influmatch_core::{
    AnalysisResult, Brand, InfluencerMatch, Locale, ProfileData, RecoveryResult, Text, Ticket,
};
use match_client::MatchClient;
use std::sync::Arc;
use tracing::info;

pub use state::{AnalysisPanel, Effect, MatchView, ProfilePanel, ScoreBar, ScoreCard, UploadDialog};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    Brand,
    Influencer,
}

impl UploadKind {
    pub fn label(self, locale: Locale) -> &'static str {
        let text = match self {
            UploadKind::Brand => Text::BrandKind,
            UploadKind::Influencer => Text::InfluencerKind,
        };
        text.in_locale(locale)
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    BrandsLoaded(Ticket, RecoveryResult<Vec<Brand>>),
    BrandSelected(String),
    MatchesLoaded(Ticket, RecoveryResult<Vec<InfluencerMatch>>),
    NextInfluencer,
    PreviousInfluencer,
    OpenAnalysis,
    Reanalyze,
    AnalysisLoaded(Ticket, RecoveryResult<AnalysisResult>),
    CloseAnalysis,
    OpenProfile,
    ProfileLoaded(Ticket, RecoveryResult<ProfileData>),
    CloseProfile,
    OpenUpload,
    UploadKindChosen(UploadKind),
    UploadNameChanged(String),
    SubmitUpload,
    CancelUpload,
    UploadFinished(UploadKind, RecoveryResult<()>),
    DismissNotice,
}

pub struct App {
    view: MatchView,
    client: Arc<MatchClient>,
}

impl App {
    pub fn new(client: Arc<MatchClient>) -> (Self, Command<Message>) {
        let (view, effects) = MatchView::new(client.locale());
        let app = Self { view, client };
        let command = app.run_effects(effects);
        (app, command)
    }

    pub fn state(&self) -> &MatchView {
        &self.view
    }

    pub fn update(&mut self, message: Message) -> Command<Message> {
        let effects = self.view.update(message);
        self.run_effects(effects)
    }

    fn run_effects(&self, effects: Vec<Effect>) -> Command<Message> {
        Command::batch(effects.into_iter().map(|effect| self.perform(effect)))
    }

    fn perform(&self, effect: Effect) -> Command<Message> {
        let client = self.client.clone();
        match effect {
            Effect::LoadBrands { ticket } => Command::perform(
                async move { client.list_brands().await },
                move |result| Message::BrandsLoaded(ticket, result),
            ),
            Effect::MatchInfluencers { brand_name, ticket } => Command::perform(
                async move { client.match_influencers(&brand_name).await },
                move |result| Message::MatchesLoaded(ticket, result),
            ),
            Effect::AnalyzeMatch {
                influencer_name,
                brand_name,
                ticket,
            } => Command::perform(
                async move { client.analyze_match(&influencer_name, &brand_name).await },
                move |result| Message::AnalysisLoaded(ticket, result),
            ),
            Effect::LoadProfile {
                influencer_name,
                ticket,
            } => Command::perform(
                async move { client.fetch_influencer_analysis(&influencer_name).await },
                move |result| Message::ProfileLoaded(ticket, result),
            ),
            Effect::AnalyzeBrand { brand_name } => {
                info!("Submitting brand for analysis: {}", brand_name);
                Command::perform(
                    async move { client.analyze_brand(&brand_name).await },
                    |result| Message::UploadFinished(UploadKind::Brand, result),
                )
            }
            Effect::AnalyzeInfluencer { influencer_name } => {
                info!("Submitting influencer for analysis: {}", influencer_name);
                Command::perform(
                    async move { client.analyze_influencer(&influencer_name).await },
                    |result| Message::UploadFinished(UploadKind::Influencer, result),
                )
            }
        }
    }

    pub fn view(&self) -> Element<Message, Theme> {
        let locale = self.view.locale();
        let title: Element<Message, Theme> =
            text(Text::AppTitle.in_locale(locale)).size(24).into();

        let brand_picker: Element<Message, Theme> = if self.view.brands_loading() {
            text(Text::LoadingBrands.in_locale(locale)).size(14).into()
        } else {
            row![
                pick_list(
                    self.view.brand_names(),
                    self.view.selected_brand().map(str::to_string),
                    Message::BrandSelected,
                )
                .placeholder(Text::SelectBrand.in_locale(locale)),
                button(Text::OpenUpload.in_locale(locale)).on_press(Message::OpenUpload),
            ]
            .spacing(10)
            .align_items(Alignment::Center)
            .into()
        };

        let mut page = Column::new().spacing(20).push(title).push(brand_picker);

        if let Some(notice) = self.view.notice() {
            page = page.push(
                row![
                    text(&notice.message).size(14),
                    button(Text::Dismiss.in_locale(locale)).on_press(Message::DismissNotice),
                ]
                .spacing(10)
                .align_items(Alignment::Center),
            );
        }

        if let Some(dialog) = self.view.upload() {
            page = page.push(self.upload_view(dialog));
        }

        page = page.push(self.carousel_view());

        if let Some(panel) = self.view.analysis() {
            page = page.push(analysis_view(panel, locale));
        }
        if let Some(panel) = self.view.profile() {
            page = page.push(profile_view(panel, locale));
        }

        container(scrollable(page))
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(20)
            .into()
    }

    fn carousel_view(&self) -> Element<Message, Theme> {
        let locale = self.view.locale();
        if self.view.matches_loading() {
            return text(Text::FindingMatches.in_locale(locale)).size(16).into();
        }
        if self.view.selected_brand().is_none() {
            return text(Text::PickBrandPrompt.in_locale(locale)).size(16).into();
        }

        let Some(card) = self.view.score_card() else {
            return text(Text::NoMatches.in_locale(locale)).size(16).into();
        };

        let mut bars = Column::new().spacing(8);
        for bar in &card.bars {
            bars = bars.push(
                row![
                    text(bar.label).width(Length::Fixed(140.0)),
                    progress_bar(0.0..=100.0, bar.fill_percent as f32).height(Length::Fixed(12.0)),
                    text(bar.value_text.clone()).width(Length::Fixed(60.0)),
                ]
                .spacing(10)
                .align_items(Alignment::Center),
            );
        }

        let position = format!(
            "{} / {}",
            self.view.current_index() + 1,
            self.view.matches().len()
        );

        let mut header = column![
            text(card.influencer.clone()).size(20),
            text(format!(
                "{}: {}",
                Text::MatchScore.in_locale(locale),
                card.score_text
            )).size(16),
        ]
        .spacing(4);
        if let Some(category) = &card.category {
            header = header.push(text(category.clone()).size(12));
        }

        container(
            column![
                header,
                bars,
                row![
                    button("<").on_press(Message::PreviousInfluencer),
                    text(position),
                    button(">").on_press(Message::NextInfluencer),
                    button(Text::AnalyzeMatch.in_locale(locale)).on_press(Message::OpenAnalysis),
                    button(Text::ShowProfile.in_locale(locale)).on_press(Message::OpenProfile),
                ]
                .spacing(10)
                .align_items(Alignment::Center),
            ]
            .spacing(15),
        )
        .padding(10)
        .into()
    }

    fn upload_view(&self, dialog: &UploadDialog) -> Element<Message, Theme> {
        let locale = self.view.locale();
        let kinds = row![
            radio(
                UploadKind::Brand.label(locale),
                UploadKind::Brand,
                dialog.kind,
                Message::UploadKindChosen,
            ),
            radio(
                UploadKind::Influencer.label(locale),
                UploadKind::Influencer,
                dialog.kind,
                Message::UploadKindChosen,
            ),
        ]
        .spacing(20);

        let mut content = column![text(Text::UploadTitle.in_locale(locale)).size(18), kinds].spacing(10);

        if dialog.kind.is_some() {
            content = content.push(
                text_input(Text::NameField.in_locale(locale), &dialog.name)
                    .on_input(Message::UploadNameChanged)
                    .on_submit(Message::SubmitUpload),
            );
        }

        let submit = button(Text::Submit.in_locale(locale));
        let submit = if dialog.kind.is_some() {
            submit.on_press(Message::SubmitUpload)
        } else {
            submit
        };

        container(
            content.push(
                row![
                    submit,
                    button(Text::Cancel.in_locale(locale)).on_press(Message::CancelUpload)
                ].spacing(10),
            ),
        )
        .padding(10)
        .into()
    }
}

fn analysis_view(panel: &AnalysisPanel, locale: Locale) -> Element<'_, Message, Theme> {
    let heading = text(format!(
        "{} x {}",
        panel.influencer_name, panel.brand_name
    ))
    .size(18);

    let body: Element<Message, Theme> = if panel.loading {
        text(Text::Analyzing.in_locale(locale)).into()
    } else if let Some(result) = &panel.result {
        column![
            section(Text::StrengthsHeading.in_locale(locale), &result.influencer_strengths),
            section(Text::ContentStyleHeading.in_locale(locale), &result.content_style),
            section(Text::CompatibilityHeading.in_locale(locale), &result.brand_compatibility),
            section(Text::CampaignHeading.in_locale(locale), &result.campaign_suitability),
            section(
                Text::RecommendationsHeading.in_locale(locale),
                &result.strategic_recommendations
            ),
        ]
        .spacing(10)
        .into()
    } else if let Some(error) = &panel.error {
        text(&error.message).into()
    } else {
        text(Text::NoAnalysis.in_locale(locale)).into()
    };

    let mut actions =
        row![button(Text::Close.in_locale(locale)).on_press(Message::CloseAnalysis)].spacing(10);
    if !panel.loading {
        actions =
            actions.push(button(Text::AnalyzeAgain.in_locale(locale)).on_press(Message::Reanalyze));
    }

    container(column![heading, body, actions].spacing(10))
        .padding(10)
        .into()
}

/// Shows whatever profile data is at hand, even while a fresher copy loads.
fn profile_view(panel: &ProfilePanel, locale: Locale) -> Element<'_, Message, Theme> {
    let body: Element<Message, Theme> = match &panel.data {
        Some(data) => column![
            section(Text::ContentHeading.in_locale(locale), &data.type_of_content),
            section(Text::AudienceHeading.in_locale(locale), &data.target_audience),
            section(Text::PositioningAxis.in_locale(locale), &data.positioning),
            section(Text::PersonalityAxis.in_locale(locale), &data.personality),
            section(Text::VisionAxis.in_locale(locale), &data.vision),
        ]
        .spacing(10)
        .into(),
        None => text(Text::LoadingProfile.in_locale(locale)).into(),
    };

    container(
        column![
            text(&panel.influencer_name).size(18),
            body,
            button(Text::Close.in_locale(locale)).on_press(Message::CloseProfile),
        ]
        .spacing(10),
    )
    .padding(10)
    .into()
}

fn section<'a>(label: &'a str, value: &'a str) -> Element<'a, Message, Theme> {
    column![text(label).size(14), text(value).size(13)]
        .spacing(2)
        .into()
}
