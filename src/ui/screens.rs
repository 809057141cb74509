use iced::widget::{button, column, container, image, row, scrollable, text, Column, Space};
use iced::{Alignment, Element, Length};

use super::assets::AssetResolver;
use super::theme;
use crate::app::{Message, Screen};
use crate::state::catalog::{StaticCatalog, PLAYER_PLACEHOLDER_IMAGE};
use crate::state::display::{fantasy_rows, injury_rows};
use crate::state::main_screen::MainViewModel;
use crate::state::schedule::{ScheduleViewModel, DEFAULT_SCHEDULE_IMAGE};

/// Image for `id`, or its name in brackets when the asset is missing
fn asset_image<'a>(assets: &AssetResolver, id: &str, height: f32) -> Element<'a, Message> {
    match assets.resolve(id) {
        Some(path) => image(image::Handle::from_path(path))
            .height(Length::Fixed(height))
            .into(),
        None => text(format!("[{}]", id)).size(14).into(),
    }
}

/// Title row with a Back button, shared by every sub-screen
fn header<'a>(title: &'a str) -> Element<'a, Message> {
    row![
        button("Back")
            .on_press(Message::Navigate(Screen::Main))
            .padding(8),
        text(title).size(32),
    ]
    .spacing(20)
    .align_y(Alignment::Center)
    .into()
}

fn nav_button<'a>(title: &'a str, screen: Screen) -> Element<'a, Message> {
    button(text(title).size(14))
        .on_press(Message::Navigate(screen))
        .padding(8)
        .width(Length::Fixed(90.0))
        .into()
}

pub fn main_view<'a>(
    vm: &'a MainViewModel,
    catalog: &StaticCatalog,
    assets: &AssetResolver,
) -> Element<'a, Message> {
    let score_banner = container(
        row![
            container(
                text(vm.home.label())
                    .size(16)
                    .font(theme::BOLD)
                    .color(theme::HOME_COLOR)
            )
            .padding(12)
            .style(container::rounded_box),
            text("|").size(40).font(theme::BOLD),
            container(
                text(vm.away.label())
                    .size(16)
                    .font(theme::BOLD)
                    .color(theme::AWAY_COLOR)
            )
            .padding(12)
            .style(container::rounded_box),
        ]
        .spacing(10)
        .align_y(Alignment::Center),
    )
    .padding(12)
    .style(container::bordered_box);

    let next_game = container(text(vm.next_game.as_str()).size(18))
        .padding(12)
        .style(container::rounded_box);

    let logo = match catalog.logo() {
        Some(id) => asset_image(assets, id, 200.0),
        None => Space::with_height(200).into(),
    };

    let nav = row![
        nav_button("Schedule", Screen::Schedule),
        nav_button("Injury", Screen::Injuries),
        nav_button("Fantasy", Screen::FantasyPoints),
        nav_button("Tips", Screen::Tips),
    ]
    .spacing(10);

    column![
        text("49ers App").size(40),
        score_banner,
        next_game,
        Space::with_height(30),
        logo,
        Space::with_height(Length::Fill),
        nav,
    ]
    .spacing(16)
    .padding(30)
    .align_x(Alignment::Center)
    .into()
}

pub fn schedule_view<'a>(vm: &ScheduleViewModel, assets: &AssetResolver) -> Element<'a, Message> {
    column![
        header("Game Schedule"),
        asset_image(assets, vm.displayed_image(), 400.0),
        button("Save New Schedule Image")
            .on_press(Message::SaveSchedule(DEFAULT_SCHEDULE_IMAGE.to_string()))
            .padding(10),
    ]
    .spacing(20)
    .padding(30)
    .align_x(Alignment::Center)
    .into()
}

pub fn injury_view<'a>(catalog: &StaticCatalog, assets: &AssetResolver) -> Element<'a, Message> {
    let rows = injury_rows(catalog).into_iter().map(|injury| -> Element<'a, Message> {
        let status = text(injury.status_line)
            .size(14)
            .font(theme::BOLD)
            .color(theme::treatment_color(injury.treatment));

        container(
            row![
                asset_image(assets, PLAYER_PLACEHOLDER_IMAGE, 50.0),
                column![text(injury.player).size(18), status].spacing(4),
            ]
            .spacing(10)
            .align_y(Alignment::Center),
        )
        .padding(12)
        .width(Length::Fill)
        .style(container::rounded_box)
        .into()
    });

    column![
        header("Injury Report"),
        scrollable(Column::with_children(rows).spacing(10)),
    ]
    .spacing(20)
    .padding(30)
    .into()
}

pub fn fantasy_view<'a>(catalog: &StaticCatalog, assets: &AssetResolver) -> Element<'a, Message> {
    let rows = fantasy_rows(catalog).into_iter().map(|entry| -> Element<'a, Message> {
        let points = row![
            text("★").color(theme::STAR_COLOR),
            text(entry.points_line)
                .size(14)
                .font(theme::BOLD)
                .color(theme::POINTS_COLOR),
        ]
        .spacing(6);

        container(
            row![
                asset_image(assets, PLAYER_PLACEHOLDER_IMAGE, 50.0),
                column![text(entry.player).size(18), points].spacing(4),
            ]
            .spacing(10)
            .align_y(Alignment::Center),
        )
        .padding(12)
        .width(Length::Fill)
        .style(container::rounded_box)
        .into()
    });

    column![
        header("Fantasy Points"),
        scrollable(Column::with_children(rows).spacing(10)),
    ]
    .spacing(20)
    .padding(30)
    .into()
}

pub fn tips_view<'a>(catalog: &'a StaticCatalog) -> Element<'a, Message> {
    let tips = catalog.tips().iter().map(|tip| -> Element<'a, Message> {
        text(tip.content.as_str()).size(16).into()
    });

    column![
        header("Game Day Tips"),
        scrollable(Column::with_children(tips).spacing(12)),
    ]
    .spacing(20)
    .padding(30)
    .into()
}
