// SPDX-License-Identifier: MPL-2.0
//! Caption and details of the current item.

use crate::domain::metadata::MetadataPayload;
use crate::ui::design_tokens::{palette, spacing, typography};
use iced::widget::{Column, Row, Text};
use iced::{alignment, Element, Length};

/// Detail fields in display order. Absent ones render as empty text.
#[must_use]
pub fn detail_fields(payload: &MetadataPayload) -> [&str; 4] {
    [
        MetadataPayload::text(payload.date.as_ref()),
        MetadataPayload::text(payload.location.as_ref()),
        MetadataPayload::text(payload.sensitivity_label.as_ref()),
        MetadataPayload::text(payload.sequence_label.as_ref()),
    ]
}

/// Caption on top, details below. Shows `placeholder` without a payload.
pub fn view<'a, M: 'a>(payload: Option<&'a MetadataPayload>, placeholder: String) -> Element<'a, M> {
    let Some(payload) = payload else {
        return Text::new(placeholder)
            .size(typography::BODY)
            .color(palette::GRAY_400)
            .into();
    };

    let details = detail_fields(payload)
        .into_iter()
        .fold(Row::new().spacing(spacing::LG), |row, field| {
            row.push(Text::new(field).size(typography::BODY_SM))
        });

    Column::new()
        .spacing(spacing::XXS)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new(payload.caption.as_str()).size(typography::TITLE_SM))
        .push(details)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::collection::{ImageRecord, MediaRecord};

    #[test]
    fn missing_fields_are_blank() {
        let record = MediaRecord::Image(ImageRecord {
            caption: "Harbour at dusk".into(),
            date: Some("1998".into()),
            ..ImageRecord::default()
        });
        let payload = MetadataPayload::for_record(&record);
        assert_eq!(detail_fields(&payload), ["1998", "", "", ""]);
    }

    #[test]
    fn film_details_are_labelled() {
        let record = MediaRecord::Image(ImageRecord {
            caption: "Pier".into(),
            sensitivity: Some("400".into()),
            sequence_index: Some(3),
            sequence_total: Some(24),
            ..ImageRecord::default()
        });
        let payload = MetadataPayload::for_record(&record);
        assert_eq!(detail_fields(&payload)[2..], ["ASA: 400", "3 of 24"]);
    }
}
