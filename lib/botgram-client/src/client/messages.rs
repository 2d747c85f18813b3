// Copyright 2024 - developers of the `botgram` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Methods related to sending and editing messages.
//!
//! These forward their arguments into the request structs of
//! [`crate::requests`]; build a request directly and [`Bot::invoke`] it for
//! options not exposed here.

use botgram_types::{ChatId, InputFile, Message, ReplyParameters};

use super::Bot;
use crate::errors::InvocationError;
use crate::requests::{
    EditMessageText, SendContact, SendDice, SendDocument, SendLocation, SendMessage, SendPhoto,
    SendVenue,
};

impl Bot {
    /// Sends a text message to the desired chat.
    pub async fn send_message(
        &self,
        chat: impl Into<ChatId>,
        text: impl Into<String>,
    ) -> Result<Message, InvocationError> {
        self.invoke(&SendMessage::new(chat, text)).await
    }

    /// Sends a text message as a reply to an existing one, in its chat.
    pub async fn reply(
        &self,
        to: &Message,
        text: impl Into<String>,
    ) -> Result<Message, InvocationError> {
        let mut request = SendMessage::new(to.chat.id, text);
        request.reply_parameters = Some(ReplyParameters::to(to));
        self.invoke(&request).await
    }

    /// Edits the text of a previously sent message.
    pub async fn edit_message(
        &self,
        chat: impl Into<ChatId>,
        message_id: i64,
        text: impl Into<String>,
    ) -> Result<Message, InvocationError> {
        self.invoke(&EditMessageText::new(chat, message_id, text))
            .await
    }

    /// Sends a phone contact.
    pub async fn send_contact(
        &self,
        chat: impl Into<ChatId>,
        phone_number: impl Into<String>,
        first_name: impl Into<String>,
    ) -> Result<Message, InvocationError> {
        self.invoke(&SendContact::new(chat, phone_number, first_name))
            .await
    }

    /// Replies to a message with a phone contact.
    pub async fn reply_with_contact(
        &self,
        to: &Message,
        phone_number: impl Into<String>,
        first_name: impl Into<String>,
    ) -> Result<Message, InvocationError> {
        let mut request = SendContact::new(to.chat.id, phone_number, first_name);
        request.reply_parameters = Some(ReplyParameters::to(to));
        self.invoke(&request).await
    }

    /// Sends an animated dice roll.
    pub async fn send_dice(&self, chat: impl Into<ChatId>) -> Result<Message, InvocationError> {
        self.invoke(&SendDice::new(chat)).await
    }

    /// Replies to a message with an animated dice roll.
    pub async fn reply_with_dice(&self, to: &Message) -> Result<Message, InvocationError> {
        let mut request = SendDice::new(to.chat.id);
        request.reply_parameters = Some(ReplyParameters::to(to));
        self.invoke(&request).await
    }

    /// Sends a point on the map.
    pub async fn send_location(
        &self,
        chat: impl Into<ChatId>,
        latitude: f64,
        longitude: f64,
    ) -> Result<Message, InvocationError> {
        self.invoke(&SendLocation::new(chat, latitude, longitude))
            .await
    }

    /// Sends a venue: a location with a title and an address.
    pub async fn send_venue(
        &self,
        chat: impl Into<ChatId>,
        latitude: f64,
        longitude: f64,
        title: impl Into<String>,
        address: impl Into<String>,
    ) -> Result<Message, InvocationError> {
        self.invoke(&SendVenue::new(chat, latitude, longitude, title, address))
            .await
    }

    /// Sends a photo by file identifier or URL.
    pub async fn send_photo(
        &self,
        chat: impl Into<ChatId>,
        photo: InputFile,
    ) -> Result<Message, InvocationError> {
        self.invoke(&SendPhoto::new(chat, photo)).await
    }

    /// Sends a general file by file identifier or URL.
    pub async fn send_document(
        &self,
        chat: impl Into<ChatId>,
        document: InputFile,
    ) -> Result<Message, InvocationError> {
        self.invoke(&SendDocument::new(chat, document)).await
    }
}
