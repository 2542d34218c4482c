//! Hard-coded page content: messages, wish cards and gallery photos

/// Accent used to paint a wish card before it is revealed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Gold,
    Rose,
    Violet,
    Teal,
    Sky,
    Ruby,
}

#[derive(Debug, Clone, Copy)]
pub struct WishCard {
    pub title: &'static str,
    pub content: &'static str,
    pub icon: &'static str,
    pub accent: Accent,
}

#[derive(Debug, Clone, Copy)]
pub struct Photo {
    pub url: &'static str,
    pub caption: &'static str,
    pub date: &'static str,
}

pub const GATE_TITLE: &str = "Before we begin this special journey...";
pub const GATE_QUESTION: &str = "Do you remember the official date we started dating?";
pub const GATE_HINT: &str = "Think about that beautiful spring day when everything changed... 🌸";
pub const GATE_SUCCESS: &str = "Yes! That's when my world changed forever 💕";

pub const COUNTDOWN_TITLE: &str = "Counting down to your special day...";
pub const COUNTDOWN_TAGLINE: &str = "Every second brings us closer to celebrating you";

pub const BIRTHDAY_GREETING: &str = "Happy Birthday,";
pub const BIRTHDAY_NAME: &str = "Beautiful! 💕";
pub const BIRTHDAY_LINE: &str =
    "Today is all about celebrating the most amazing person in my life";
pub const BIRTHDAY_EMOJI: [&str; 5] = ["🎈", "🎂", "🎉", "💖", "🌟"];

pub const MESSAGE_TITLE: &str = "A Message From My Heart";

pub const PERSONAL_MESSAGE: [&str; 5] = [
    "From the moment we started dating on March 16th, 2025, my life has been filled with colors I never knew existed. You brought sunshine into my darkest days and made every ordinary moment feel extraordinary.",
    "Your laugh is my favorite sound, your smile is my daily motivation, and your love is my greatest treasure. You have this incredible way of making everything better just by being yourself.",
    "I love how you dance when you think no one is watching, how you get excited about the little things, and how you make me feel like the luckiest person alive every single day.",
    "You make every day feel like a celebration, but today is special because it's all about celebrating YOU - the most beautiful, kind, and amazing person I've ever known.",
    "Happy Birthday, my love. Here's to many more years of adventures, laughter, and endless love together. You deserve all the happiness in the world, and I'm so grateful to be part of your story. 💕",
];

pub const WISHES_TITLE: &str = "Birthday Wishes Collection";
pub const WISHES_PROMPT: &str = "Pick each card to reveal a special message 💝";
pub const WISHES_DONE: &str = "Now let's look at our beautiful memories together...";

pub const WISHES: [WishCard; 6] = [
    WishCard {
        title: "My Wish for You",
        content: "May this new year of your life be filled with endless joy, laughter, and all the dreams your heart desires. You deserve nothing but the absolute best! ✨",
        icon: "★",
        accent: Accent::Gold,
    },
    WishCard {
        title: "Our Future Together",
        content: "I can't wait to celebrate many more birthdays with you, create countless more memories, and grow old together while still feeling young at heart. 💕",
        icon: "♥",
        accent: Accent::Rose,
    },
    WishCard {
        title: "What Makes You Special",
        content: "Your kindness lights up every room, your smile makes my day brighter, and your love makes me a better person. You're absolutely incredible! 🌟",
        icon: "✦",
        accent: Accent::Violet,
    },
    WishCard {
        title: "Adventures Ahead",
        content: "Here's to more spontaneous road trips, cozy movie nights, trying new restaurants, and making every ordinary day feel like an adventure together! 🎈",
        icon: "🎁",
        accent: Accent::Teal,
    },
    WishCard {
        title: "Favorite Memories",
        content: "Remember our first date? The way you laughed at my terrible jokes? Every moment with you becomes a treasured memory that I carry in my heart. 📸",
        icon: "📷",
        accent: Accent::Sky,
    },
    WishCard {
        title: "You Are Loved",
        content: "Never forget how deeply you are loved, how much you mean to me, and how grateful I am every day that you chose to share your life with me. Happy Birthday! 💖",
        icon: "♥",
        accent: Accent::Ruby,
    },
];

pub const GALLERY_TITLE: &str = "Our Beautiful Memories";
pub const GALLERY_CLOSING: &str = "Now let's go celebrate in person! 🎉";
pub const GALLERY_SIGNOFF: &str = "Happy Birthday, my love! 💕";

pub const PHOTOS: [Photo; 6] = [
    Photo {
        url: "https://images.unsplash.com/photo-1516589178581-6cd7833ae3b2?w=800&h=600&fit=crop",
        caption: "Our first photo together - the beginning of our beautiful story 💕",
        date: "March 16, 2025",
    },
    Photo {
        url: "https://images.unsplash.com/photo-1518568814500-bf0f8d125f46?w=800&h=600&fit=crop",
        caption: "That perfect sunset dinner where you stole my heart completely 🌅",
        date: "April 2025",
    },
    Photo {
        url: "https://images.unsplash.com/photo-1511988617509-a57c8a288659?w=800&h=600&fit=crop",
        caption: "Dancing in the kitchen like nobody's watching - pure happiness ✨",
        date: "May 2025",
    },
    Photo {
        url: "https://images.unsplash.com/photo-1469474968028-56623f02e42e?w=800&h=600&fit=crop",
        caption: "Our adventure to the mountains - you make every view more beautiful 🏔️",
        date: "June 2025",
    },
    Photo {
        url: "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?w=800&h=600&fit=crop",
        caption: "Beach day bliss - your smile brighter than the sunshine ☀️",
        date: "July 2025",
    },
    Photo {
        url: "https://images.unsplash.com/photo-1441974231531-c6227db76b6e?w=800&h=600&fit=crop",
        caption: "Cozy moments together - my favorite place is wherever you are 🏡",
        date: "August 2025",
    },
];
