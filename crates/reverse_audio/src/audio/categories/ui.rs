//! Menu and HUD feedback sounds

use crate::audio::event::{EventEntry, SoundCategory, SoundEvent};
use crate::audio::manager::CategoryManager;
use crate::audio::SoundPlayer;

/// UI sound events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UiSound {
    /// An action is confirmed
    Accept,
    /// Navigating back in menus
    Back,
    /// An action is cancelled
    Cancel,
    /// A window or panel closes
    Close,
    /// An item is crafted
    Craft,
    /// A disabled control is hovered or pressed
    Disabled,
    /// An item is dragged
    Drag,
    /// An item is dropped
    Drop,
    /// An item is equipped
    Equip,
    /// An item is unequipped
    Unequip,
    /// An invalid action
    Error,
    /// A UI element is exited
    Exit,
    /// A control is hovered
    Hovered,
    /// A window or panel opens
    Open,
    /// An item is picked up
    Pickup,
    /// A button is pressed
    Pressed,
    /// An item is bought
    Purchase,
    /// A notification or popup
    Notification,
    /// A list or inventory scrolls
    Scroll,
    /// A control gains focus
    Select,
    /// An item is sold
    Sell,
    /// A slider or value decreases
    SliderDecrease,
    /// A slider or value increases
    SliderIncrease,
    /// A tab is switched
    TabSwitch,
    /// Something is upgraded or levels up
    Upgrade,
}

impl SoundEvent for UiSound {
    const CATEGORY: SoundCategory = SoundCategory::Ui;

    const TABLE: &'static [EventEntry<Self>] = &[
        EventEntry::new(UiSound::Accept, "accept", "audio/ui/accept.wav"),
        EventEntry::new(UiSound::Back, "back", "audio/ui/back.wav"),
        EventEntry::new(UiSound::Cancel, "cancel", "audio/ui/cancel.wav"),
        EventEntry::new(UiSound::Craft, "craft", "audio/ui/craft.wav"),
        EventEntry::new(UiSound::Close, "close", "audio/ui/close.wav"),
        EventEntry::new(UiSound::Disabled, "disabled", "audio/ui/disabled.wav"),
        EventEntry::new(UiSound::Drag, "drag", "audio/ui/drag.wav"),
        EventEntry::new(UiSound::Drop, "drop", "audio/ui/drop.wav"),
        EventEntry::new(UiSound::Equip, "equip", "audio/ui/equip.wav"),
        EventEntry::new(UiSound::Error, "error", "audio/ui/error.wav"),
        EventEntry::new(UiSound::Hovered, "hovered", "audio/ui/hovered.wav"),
        EventEntry::new(UiSound::Open, "open", "audio/ui/open.wav"),
        EventEntry::new(UiSound::Pickup, "pickup", "audio/ui/pickup.wav"),
        EventEntry::new(UiSound::Pressed, "pressed", "audio/ui/pressed.wav"),
        EventEntry::new(UiSound::Purchase, "purchase", "audio/ui/purchase.wav"),
        EventEntry::new(
            UiSound::Notification,
            "notification",
            "audio/ui/notification.wav",
        ),
        EventEntry::new(UiSound::Scroll, "scroll", "audio/ui/scroll.wav"),
        EventEntry::new(UiSound::Sell, "sell", "audio/ui/sell.wav"),
        EventEntry::new(UiSound::Select, "select", "audio/ui/select.wav"),
        EventEntry::new(
            UiSound::SliderDecrease,
            "slider-decrease",
            "audio/ui/slider/decrease.wav",
        ),
        EventEntry::new(
            UiSound::SliderIncrease,
            "slider-increase",
            "audio/ui/slider/increase.wav",
        ),
        EventEntry::new(UiSound::TabSwitch, "tab-switch", "audio/ui/tab_switch.wav"),
        EventEntry::new(UiSound::Unequip, "unequip", "audio/ui/unequip.wav"),
        EventEntry::new(UiSound::Upgrade, "upgrade", "audio/ui/upgrade.wav"),
        EventEntry::new(UiSound::Exit, "exit", "audio/ui/exit.wav"),
    ];
}

/// UI sound manager
pub type UiAudio = CategoryManager<UiSound>;

impl CategoryManager<UiSound> {
    /// Play the accept sound
    pub fn play_accept<P: SoundPlayer + ?Sized>(&self, player: &mut P) -> bool {
        self.play(player, UiSound::Accept)
    }

    /// Play the back navigation sound
    pub fn play_back<P: SoundPlayer + ?Sized>(&self, player: &mut P) -> bool {
        self.play(player, UiSound::Back)
    }

    /// Play the cancel sound
    pub fn play_cancel<P: SoundPlayer + ?Sized>(&self, player: &mut P) -> bool {
        self.play(player, UiSound::Cancel)
    }

    /// Play the window close sound
    pub fn play_close<P: SoundPlayer + ?Sized>(&self, player: &mut P) -> bool {
        self.play(player, UiSound::Close)
    }

    /// Play the crafting sound
    pub fn play_craft<P: SoundPlayer + ?Sized>(&self, player: &mut P) -> bool {
        self.play(player, UiSound::Craft)
    }

    /// Play the disabled control sound
    pub fn play_disabled<P: SoundPlayer + ?Sized>(&self, player: &mut P) -> bool {
        self.play(player, UiSound::Disabled)
    }

    /// Play the item drag sound
    pub fn play_drag<P: SoundPlayer + ?Sized>(&self, player: &mut P) -> bool {
        self.play(player, UiSound::Drag)
    }

    /// Play the item drop sound
    pub fn play_drop<P: SoundPlayer + ?Sized>(&self, player: &mut P) -> bool {
        self.play(player, UiSound::Drop)
    }

    /// Play the equip sound
    pub fn play_equip<P: SoundPlayer + ?Sized>(&self, player: &mut P) -> bool {
        self.play(player, UiSound::Equip)
    }

    /// Play the unequip sound
    pub fn play_unequip<P: SoundPlayer + ?Sized>(&self, player: &mut P) -> bool {
        self.play(player, UiSound::Unequip)
    }

    /// Play the error sound
    pub fn play_error<P: SoundPlayer + ?Sized>(&self, player: &mut P) -> bool {
        self.play(player, UiSound::Error)
    }

    /// Play the exit sound
    pub fn play_exit<P: SoundPlayer + ?Sized>(&self, player: &mut P) -> bool {
        self.play(player, UiSound::Exit)
    }

    /// Play the hover sound
    pub fn play_hovered<P: SoundPlayer + ?Sized>(&self, player: &mut P) -> bool {
        self.play(player, UiSound::Hovered)
    }

    /// Play the window open sound
    pub fn play_open<P: SoundPlayer + ?Sized>(&self, player: &mut P) -> bool {
        self.play(player, UiSound::Open)
    }

    /// Play the pickup sound
    pub fn play_pickup<P: SoundPlayer + ?Sized>(&self, player: &mut P) -> bool {
        self.play(player, UiSound::Pickup)
    }

    /// Play the button press sound
    pub fn play_pressed<P: SoundPlayer + ?Sized>(&self, player: &mut P) -> bool {
        self.play(player, UiSound::Pressed)
    }

    /// Play the purchase sound
    pub fn play_purchase<P: SoundPlayer + ?Sized>(&self, player: &mut P) -> bool {
        self.play(player, UiSound::Purchase)
    }

    /// Play the notification sound
    pub fn play_notification<P: SoundPlayer + ?Sized>(&self, player: &mut P) -> bool {
        self.play(player, UiSound::Notification)
    }

    /// Play the scroll sound
    pub fn play_scroll<P: SoundPlayer + ?Sized>(&self, player: &mut P) -> bool {
        self.play(player, UiSound::Scroll)
    }

    /// Play the focus sound
    pub fn play_select<P: SoundPlayer + ?Sized>(&self, player: &mut P) -> bool {
        self.play(player, UiSound::Select)
    }

    /// Play the sell sound
    pub fn play_sell<P: SoundPlayer + ?Sized>(&self, player: &mut P) -> bool {
        self.play(player, UiSound::Sell)
    }

    /// Play the slider decrease sound
    pub fn play_slider_decrease<P: SoundPlayer + ?Sized>(&self, player: &mut P) -> bool {
        self.play(player, UiSound::SliderDecrease)
    }

    /// Play the slider increase sound
    pub fn play_slider_increase<P: SoundPlayer + ?Sized>(&self, player: &mut P) -> bool {
        self.play(player, UiSound::SliderIncrease)
    }

    /// Play the tab switch sound
    pub fn play_tab_switch<P: SoundPlayer + ?Sized>(&self, player: &mut P) -> bool {
        self.play(player, UiSound::TabSwitch)
    }

    /// Play the upgrade sound
    pub fn play_upgrade<P: SoundPlayer + ?Sized>(&self, player: &mut P) -> bool {
        self.play(player, UiSound::Upgrade)
    }
}
