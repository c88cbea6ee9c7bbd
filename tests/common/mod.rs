#![allow(dead_code)]

use mushaf::corpus::CorpusIndex;
use mushaf::loader::{
    AyahContent, AyahRecord, BismillahStatus, Boundary, CorpusDocument, SurahRecord,
};

pub const BISMILLAH: &str = "بِسْمِ اللَّهِ الرَّحْمَٰنِ الرَّحِيمِ";

pub const VERSE_COUNTS: [u16; 114] = [
    7, 286, 200, 176, 120, 165, 206, 75, 129, 109, 123, 111, 43, 52, 99, 128, 111, 110, 98, 135,
    112, 78, 118, 64, 77, 227, 93, 88, 69, 60, 34, 30, 73, 54, 45, 83, 182, 88, 75, 85, 54, 53,
    89, 59, 37, 35, 38, 29, 18, 45, 60, 49, 62, 55, 78, 96, 29, 22, 24, 13, 14, 11, 11, 18, 12, 12,
    30, 52, 52, 44, 28, 28, 20, 56, 40, 31, 50, 40, 46, 42, 29, 19, 36, 25, 22, 17, 19, 26, 30, 20,
    15, 21, 11, 8, 8, 19, 5, 8, 8, 11, 11, 8, 3, 9, 5, 4, 7, 3, 6, 3, 5, 4, 5, 6,
];

pub const TOTAL_VERSES: usize = 6236;

// (name, transliteration, description)
pub const CHAPTERS: [(&str, &str, &str); 114] = [
    ("الْفَاتِحَه", "Al-Fatihah", "The Opener"),
    ("البَقَرَة", "Al-Baqarah", "The Cow"),
    ("آل عِمرَان", "Ali 'Imran", "Family of Imran"),
    ("النِّسَاء", "An-Nisa", "The Women"),
    ("المَائدة", "Al-Ma'idah", "The Table Spread"),
    ("الاٴنعَام", "Al-An'am", "The Cattle"),
    ("الأعراف", "Al-A'raf", "The Heights"),
    ("الأنفال", "Al-Anfal", "The Spoils of War"),
    ("التوبة", "At-Tawbah", "The Repentance"),
    ("يونس", "Yunus", "Jonah"),
    ("هود", "Hud", "Hud"),
    ("يوسف", "Yusuf", "Joseph"),
    ("الرعد", "Ar-Ra'd", "The Thunder"),
    ("إبراهيم", "Ibrahim", "Abraham"),
    ("الحجر", "Al-Hijr", "The Rocky Tract"),
    ("النحل", "An-Nahl", "The Bee"),
    ("الإسراء", "Al-Isra", "The Night Journey"),
    ("الكهف", "Al-Kahf", "The Cave"),
    ("مريم", "Maryam", "Mary"),
    ("طه", "Taha", "Ta-Ha"),
    ("الأنبياء", "Al-Anbya", "The Prophets"),
    ("الحج", "Al-Hajj", "The Pilgrimage"),
    ("المؤمنون", "Al-Mu'minun", "The Believers"),
    ("النور", "An-Nur", "The Light"),
    ("الفرقان", "Al-Furqan", "The Criterion"),
    ("الشعراء", "Ash-Shu'ara", "The Poets"),
    ("النمل", "An-Naml", "The Ant"),
    ("القصص", "Al-Qasas", "The Stories"),
    ("العنكبوت", "Al-'Ankabut", "The Spider"),
    ("الروم", "Ar-Rum", "The Romans"),
    ("لقمان", "Luqman", "Luqman"),
    ("السجدة", "As-Sajdah", "The Prostration"),
    ("الأحزاب", "Al-Ahzab", "The Combined Forces"),
    ("سبأ", "Saba", "Sheba"),
    ("فاطر", "Fatir", "Originator"),
    ("يس", "Ya-Sin", "Ya Sin"),
    ("الصافات", "As-Saffat", "Those who set the Ranks"),
    ("ص", "Sad", "The Letter Sad"),
    ("الزمر", "Az-Zumar", "The Troops"),
    ("غافر", "Ghafir", "The Forgiver"),
    ("فصلت", "Fussilat", "Explained in Detail"),
    ("الشورى", "Ash-Shuraa", "The Consultation"),
    ("الزخرف", "Az-Zukhruf", "The Ornaments of Gold"),
    ("الدخان", "Ad-Dukhan", "The Smoke"),
    ("الجاثية", "Al-Jathiyah", "The Crouching"),
    ("الأحقاف", "Al-Ahqaf", "The Wind-Curved Sandhills"),
    ("محمد", "Muhammad", "Muhammad"),
    ("الفتح", "Al-Fath", "The Victory"),
    ("الحجرات", "Al-Hujurat", "The Rooms"),
    ("ق", "Qaf", "The Letter Qaf"),
    ("الذاريات", "Adh-Dhariyat", "The Winnowing Winds"),
    ("الطور", "At-Tur", "The Mount"),
    ("النجم", "An-Najm", "The Star"),
    ("القمر", "Al-Qamar", "The Moon"),
    ("الرحمن", "Ar-Rahman", "The Beneficent"),
    ("الواقعة", "Al-Waqi'ah", "The Inevitable"),
    ("الحديد", "Al-Hadid", "The Iron"),
    ("المجادلة", "Al-Mujadila", "The Pleading Woman"),
    ("الحشر", "Al-Hashr", "The Exile"),
    ("الممتحنة", "Al-Mumtahanah", "She that is to be examined"),
    ("الصف", "As-Saf", "The Ranks"),
    ("الجمعة", "Al-Jumu'ah", "The Congregation, Friday"),
    ("المنافقون", "Al-Munafiqun", "The Hypocrites"),
    ("التغابن", "At-Taghabun", "The Mutual Disillusion"),
    ("الطلاق", "At-Talaq", "The Divorce"),
    ("التحريم", "At-Tahrim", "The Prohibition"),
    ("الملك", "Al-Mulk", "The Sovereignty"),
    ("القلم", "Al-Qalam", "The Pen"),
    ("الحاقة", "Al-Haqqah", "The Reality"),
    ("المعارج", "Al-Ma'arij", "The Ascending Stairways"),
    ("نوح", "Nuh", "Noah"),
    ("الجن", "Al-Jinn", "The Jinn"),
    ("المزمل", "Al-Muzzammil", "The Enshrouded One"),
    ("المدثر", "Al-Muddaththir", "The Cloaked One"),
    ("القيامة", "Al-Qiyamah", "The Resurrection"),
    ("الإنسان", "Al-Insan", "The Man"),
    ("المرسلات", "Al-Mursalat", "The Emissaries"),
    ("النبأ", "An-Naba", "The Tidings"),
    ("النازعات", "An-Nazi'at", "Those who drag forth"),
    ("عبس", "'Abasa", "He Frowned"),
    ("التكوير", "At-Takwir", "The Overthrowing"),
    ("الانفطار", "Al-Infitar", "The Cleaving"),
    ("المطففين", "Al-Mutaffifin", "The Defrauding"),
    ("الانشقاق", "Al-Inshiqaq", "The Sundering"),
    ("البروج", "Al-Buruj", "The Mansions of the Stars"),
    ("الطارق", "At-Tariq", "The Nightcommer"),
    ("الأعلى", "Al-A'la", "The Most High"),
    ("الغاشية", "Al-Ghashiyah", "The Overwhelming"),
    ("الفجر", "Al-Fajr", "The Dawn"),
    ("البلد", "Al-Balad", "The City"),
    ("الشمس", "Ash-Shams", "The Sun"),
    ("الليل", "Al-Layl", "The Night"),
    ("الضحى", "Ad-Duhaa", "The Morning Hours"),
    ("الشرح", "Ash-Sharh", "The Relief"),
    ("التين", "At-Tin", "The Fig"),
    ("العلق", "Al-'Alaq", "The Clot"),
    ("القدر", "Al-Qadr", "The Power"),
    ("البينة", "Al-Bayyinah", "The Clear Proof"),
    ("الزلزلة", "Az-Zalzalah", "The Earthquake"),
    ("العاديات", "Al-'Adiyat", "The Courser"),
    ("القارعة", "Al-Qari'ah", "The Calamity"),
    ("التكاثر", "At-Takathur", "The Rivalry in world increase"),
    ("العصر", "Al-'Asr", "The Declining Day"),
    ("الهمزة", "Al-Humazah", "The Traducer"),
    ("الفيل", "Al-Fil", "The Elephant"),
    ("قريش", "Quraysh", "Quraysh"),
    ("الماعون", "Al-Ma'un", "The Small kindnesses"),
    ("الكوثر", "Al-Kawthar", "The Abundance"),
    ("الكافرون", "Al-Kafirun", "The Disbelievers"),
    ("النصر", "An-Nasr", "The Divine Support"),
    ("المسد", "Al-Masad", "The Palm Fiber"),
    ("الإخلاص", "Al-Ikhlas", "The Sincerity"),
    ("الفلق", "Al-Falaq", "The Daybreak"),
    ("الناس", "An-Nas", "Mankind"),
];

pub const JUZ_STARTS: [(u16, u16); 30] = [
    (1, 1), (2, 142), (2, 253), (3, 93), (4, 24), (4, 148), (5, 82), (6, 111), (7, 88), (8, 41),
    (9, 93), (11, 6), (12, 53), (15, 1), (17, 1), (18, 75), (21, 1), (23, 1), (25, 21), (27, 56),
    (29, 46), (33, 31), (36, 28), (39, 32), (41, 47), (46, 1), (51, 31), (58, 1), (67, 1), (78, 1),
];

pub const HIZB_STARTS: [(u16, u16); 60] = [
    (1, 1), (2, 75), (2, 142), (2, 203), (2, 253), (3, 15), (3, 93), (3, 171), (4, 24), (4, 88),
    (4, 148), (5, 27), (5, 82), (6, 36), (6, 111), (7, 1), (7, 88), (7, 171), (8, 41), (9, 34),
    (9, 93), (10, 26), (11, 6), (11, 84), (12, 53), (13, 19), (15, 1), (16, 51), (17, 1), (17, 99),
    (18, 75), (19, 59), (21, 1), (22, 1), (23, 1), (24, 21), (25, 21), (26, 111), (27, 56), (28, 51),
    (29, 46), (31, 22), (33, 31), (34, 24), (36, 28), (37, 145), (39, 32), (40, 41), (41, 47), (43, 24),
    (46, 1), (48, 18), (51, 31), (55, 1), (58, 1), (62, 1), (67, 1), (72, 1), (78, 1), (87, 1),
];

pub const PAGE_COUNT: usize = 604;

pub fn verse_text(chapter: u16, verse: u16) -> String {
    if chapter == 1 && verse == 1 {
        BISMILLAH.to_owned()
    } else {
        format!("verse {chapter}:{verse}")
    }
}

pub fn bismillah_status(chapter: u16) -> BismillahStatus {
    match chapter {
        1 => BismillahStatus::FirstAyah,
        9 => BismillahStatus::Missing,
        _ => BismillahStatus::Present,
    }
}

pub fn surah(chapter: u16) -> SurahRecord {
    let (name, transliteration, description) = CHAPTERS[usize::from(chapter) - 1];
    let status = bismillah_status(chapter);
    SurahRecord {
        surah_uuid: format!("surah-{chapter:03}"),
        surah_name: name.to_owned(),
        surah_period: Some(if chapter < 90 { "medinan" } else { "meccan" }.to_owned()),
        surah_number: chapter,
        bismillah_status: status,
        bismillah_text: match status {
            BismillahStatus::Present => Some(BISMILLAH.to_owned()),
            _ => None,
        },
        transliteration: transliteration.to_owned(),
        description: description.to_owned(),
        ayahs: (1..=VERSE_COUNTS[usize::from(chapter) - 1])
            .map(|verse| AyahRecord {
                number: verse,
                content: AyahContent { text: verse_text(chapter, verse) },
            })
            .collect(),
    }
}

/// Converts a 0-based global verse ordinal into its (chapter, verse) address.
pub fn address(mut ordinal: usize) -> (u16, u16) {
    for (i, count) in VERSE_COUNTS.iter().enumerate() {
        let count = usize::from(*count);
        if ordinal < count {
            return ((i + 1) as u16, (ordinal + 1) as u16);
        }
        ordinal -= count;
    }
    panic!("ordinal beyond the corpus");
}

// pages spread evenly over the verse sequence
pub fn page_starts() -> Vec<(u16, u16)> {
    (0..PAGE_COUNT)
        .map(|p| address(p * TOTAL_VERSES / PAGE_COUNT))
        .collect()
}

fn boundaries(starts: &[(u16, u16)]) -> Vec<Boundary> {
    starts
        .iter()
        .map(|(surah, ayah)| Boundary { surah: *surah, ayah: *ayah })
        .collect()
}

pub fn document() -> CorpusDocument {
    CorpusDocument {
        surahs: (1..=114).map(surah).collect(),
        pages: boundaries(&page_starts()),
        juz: boundaries(&JUZ_STARTS),
        hizb: boundaries(&HIZB_STARTS),
    }
}

pub fn index() -> CorpusIndex {
    CorpusIndex::from_document(document()).expect("fixture corpus is valid")
}
