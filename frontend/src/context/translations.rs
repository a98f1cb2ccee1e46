//! Static translation tables. Lookup misses fall back to the key itself
//! in the caller, so a missing entry degrades to visible placeholder
//! text instead of breaking the page.

use super::language::Language;

pub fn lookup(language: Language, key: &str) -> Option<&'static str> {
    match language {
        Language::En => en(key),
        Language::Ru => ru(key),
        Language::Uz => uz(key),
        Language::Id => id(key),
    }
}

fn en(key: &str) -> Option<&'static str> {
    Some(match key {
        "hero_title" => "Modern Web Solutions in",
        "hero_days" => "Record Time",
        "hero_subtitle" => "Next-generation web development for forward-thinking businesses",
        "cta_start" => "Start Your Project",
        "cta_portfolio" => "View Portfolio",
        "team_title" => "Meet Our",
        "team_dream" => "Experts",
        "services_title" => "Our",
        "services_word" => "Services",
        "portfolio_title" => "See What We",
        "portfolio_build" => "Actually Build",
        "portfolio_subtitle" => "Real solutions deployed for global clients",
        "templates_title" => "Ready-Made",
        "templates_accent" => "Templates",
        "templates_subtitle" => "Interactive demos for every service we offer",
        "view_demo" => "View Demo",
        "open" => "Open",
        "previous" => "Previous",
        "next" => "Next",
        "open_full_site" => "Open Full Site",
        "project_details" => "Project Details",
        "key_features" => "Key Features",
        "category" => "Category",
        "delivery" => "Delivery",
        "reviews_title" => "Client",
        "reviews_accent" => "Reviews",
        "reviews_subtitle" => "What our clients say about working with us",
        "reviews_cta" => "Leave a Review",
        _ => return None,
    })
}

fn ru(key: &str) -> Option<&'static str> {
    Some(match key {
        "hero_title" => "Веб-Решения За",
        "hero_days" => "Рекордное Время",
        "hero_subtitle" => "Веб-разработка нового поколения для передовых компаний",
        "cta_start" => "Начать Проект",
        "cta_portfolio" => "Портфолио",
        "team_title" => "Познакомьтесь с",
        "team_dream" => "Экспертами",
        "services_title" => "Наши",
        "services_word" => "Услуги",
        "portfolio_title" => "Посмотрите Что Мы",
        "portfolio_build" => "Реально Создаем",
        "portfolio_subtitle" => "Реальные решения для глобальных клиентов",
        "templates_title" => "Готовые",
        "templates_accent" => "Шаблоны",
        "templates_subtitle" => "Интерактивные демо для каждой нашей услуги",
        "view_demo" => "Смотреть Демо",
        "open" => "Открыть",
        "previous" => "Назад",
        "next" => "Вперед",
        "open_full_site" => "Открыть Полный Сайт",
        "project_details" => "Детали Проекта",
        "key_features" => "Ключевые Функции",
        "category" => "Категория",
        "delivery" => "Сроки",
        "reviews_title" => "Отзывы",
        "reviews_accent" => "Клиентов",
        "reviews_subtitle" => "Что наши клиенты говорят о работе с нами",
        "reviews_cta" => "Оставить Отзыв",
        _ => return None,
    })
}

fn uz(key: &str) -> Option<&'static str> {
    Some(match key {
        "hero_title" => "Veb Yechimlar",
        "hero_days" => "Rekord Vaqtda",
        "hero_subtitle" => "Ilg'or kompaniyalar uchun yangi avlod veb ishlab chiqish",
        "cta_start" => "Loyihani Boshlash",
        "cta_portfolio" => "Portfolio",
        "team_title" => "Bizning",
        "team_dream" => "Mutaxassislar",
        "services_title" => "Bizning",
        "services_word" => "Xizmatlar",
        "portfolio_title" => "Biz Nima",
        "portfolio_build" => "Yaratamiz",
        "portfolio_subtitle" => "Global mijozlar uchun haqiqiy yechimlar",
        "templates_title" => "Tayyor",
        "templates_accent" => "Shablonlar",
        "templates_subtitle" => "Har bir xizmatimiz uchun interaktiv demolar",
        "view_demo" => "Demoni Ko'rish",
        "open" => "Ochish",
        "previous" => "Oldingi",
        "next" => "Keyingi",
        "open_full_site" => "To'liq Saytni Ochish",
        "project_details" => "Loyiha Tafsilotlari",
        "key_features" => "Asosiy Xususiyatlar",
        "category" => "Kategoriya",
        "delivery" => "Yetkazib berish",
        "reviews_title" => "Mijozlar",
        "reviews_accent" => "Fikrlari",
        "reviews_subtitle" => "Mijozlarimiz biz bilan ishlash haqida nima deydi",
        "reviews_cta" => "Fikr Qoldirish",
        _ => return None,
    })
}

fn id(key: &str) -> Option<&'static str> {
    Some(match key {
        "hero_title" => "Solusi Web dalam",
        "hero_days" => "Waktu Singkat",
        "hero_subtitle" => "Pengembangan web generasi berikutnya untuk bisnis visioner",
        "cta_start" => "Mulai Proyek Anda",
        "cta_portfolio" => "Lihat Portfolio",
        "team_title" => "Temui",
        "team_dream" => "Ahli Kami",
        "services_title" => "Layanan",
        "services_word" => "Kami",
        "portfolio_title" => "Lihat Apa Yang",
        "portfolio_build" => "Kami Bangun",
        "portfolio_subtitle" => "Solusi nyata untuk klien global",
        "templates_title" => "Template",
        "templates_accent" => "Siap Pakai",
        "templates_subtitle" => "Demo interaktif untuk setiap layanan kami",
        "view_demo" => "Lihat Demo",
        "open" => "Buka",
        "previous" => "Sebelumnya",
        "next" => "Selanjutnya",
        "open_full_site" => "Buka Situs Lengkap",
        "project_details" => "Detail Proyek",
        "key_features" => "Fitur Utama",
        "category" => "Kategori",
        "delivery" => "Pengiriman",
        "reviews_title" => "Ulasan",
        "reviews_accent" => "Klien",
        "reviews_subtitle" => "Apa kata klien kami tentang bekerja dengan kami",
        "reviews_cta" => "Tulis Ulasan",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const LANGUAGES: [Language; 4] =
        [Language::En, Language::Ru, Language::Uz, Language::Id];

    #[test]
    fn every_english_key_exists_in_every_language() {
        let keys = [
            "hero_title", "hero_days", "hero_subtitle", "cta_start",
            "cta_portfolio", "team_title", "team_dream", "services_title",
            "services_word", "portfolio_title", "portfolio_build",
            "portfolio_subtitle", "templates_title", "templates_accent",
            "templates_subtitle", "view_demo", "open", "previous", "next",
            "open_full_site", "project_details", "key_features", "category",
            "delivery", "reviews_title", "reviews_accent", "reviews_subtitle",
            "reviews_cta",
        ];
        for language in LANGUAGES {
            for key in keys {
                assert!(
                    lookup(language, key).is_some(),
                    "{key} missing for {language:?}"
                );
            }
        }
    }

    #[test]
    fn unknown_key_misses_in_every_language() {
        for language in LANGUAGES {
            assert_eq!(lookup(language, "no_such_key"), None);
        }
    }
}
