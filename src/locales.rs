//! Message tables for every supported language.
//!
//! English carries every key. Other languages fall back to English for keys
//! they do not define.

use crate::messages::MessageKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    Arabic,
    Bengali,
    German,
    #[default]
    English,
    Spanish,
    Persian,
    French,
    Hindi,
    Indonesian,
    Japanese,
    Javanese,
    Korean,
    Marathi,
    Malay,
    Punjabi,
    Portuguese,
    Russian,
    Swahili,
    Tamil,
    Telugu,
    Thai,
    Turkish,
    Ukrainian,
    Urdu,
    Vietnamese,
    ChineseSimplified,
    ChineseTraditional,
}

impl Language {
    pub const ALL: [Language; 27] = [
        Language::Arabic,
        Language::Bengali,
        Language::German,
        Language::English,
        Language::Spanish,
        Language::Persian,
        Language::French,
        Language::Hindi,
        Language::Indonesian,
        Language::Japanese,
        Language::Javanese,
        Language::Korean,
        Language::Marathi,
        Language::Malay,
        Language::Punjabi,
        Language::Portuguese,
        Language::Russian,
        Language::Swahili,
        Language::Tamil,
        Language::Telugu,
        Language::Thai,
        Language::Turkish,
        Language::Ukrainian,
        Language::Urdu,
        Language::Vietnamese,
        Language::ChineseSimplified,
        Language::ChineseTraditional,
    ];

    /// ISO 639-1 code, with the region for the two Chinese scripts.
    pub fn code(self) -> &'static str {
        match self {
            Language::Arabic => "ar",
            Language::Bengali => "bn",
            Language::German => "de",
            Language::English => "en",
            Language::Spanish => "es",
            Language::Persian => "fa",
            Language::French => "fr",
            Language::Hindi => "hi",
            Language::Indonesian => "id",
            Language::Japanese => "ja",
            Language::Javanese => "jv",
            Language::Korean => "ko",
            Language::Marathi => "mr",
            Language::Malay => "ms",
            Language::Punjabi => "pa",
            Language::Portuguese => "pt",
            Language::Russian => "ru",
            Language::Swahili => "sw",
            Language::Tamil => "ta",
            Language::Telugu => "te",
            Language::Thai => "th",
            Language::Turkish => "tr",
            Language::Ukrainian => "uk",
            Language::Urdu => "ur",
            Language::Vietnamese => "vi",
            Language::ChineseSimplified => "zh_CN",
            Language::ChineseTraditional => "zh_TW",
        }
    }

    /// English name as reported by Windows-style locales (`Japanese_Japan.932`).
    pub fn name(self) -> &'static str {
        match self {
            Language::Arabic => "Arabic",
            Language::Bengali => "Bengali",
            Language::German => "German",
            Language::English => "English",
            Language::Spanish => "Spanish",
            Language::Persian => "Persian",
            Language::French => "French",
            Language::Hindi => "Hindi",
            Language::Indonesian => "Indonesian",
            Language::Japanese => "Japanese",
            Language::Javanese => "Javanese",
            Language::Korean => "Korean",
            Language::Marathi => "Marathi",
            Language::Malay => "Malay",
            Language::Punjabi => "Punjabi",
            Language::Portuguese => "Portuguese",
            Language::Russian => "Russian",
            Language::Swahili => "Swahili",
            Language::Tamil => "Tamil",
            Language::Telugu => "Telugu",
            Language::Thai => "Thai",
            Language::Turkish => "Turkish",
            Language::Ukrainian => "Ukrainian",
            Language::Urdu => "Urdu",
            Language::Vietnamese => "Vietnamese",
            Language::ChineseSimplified => "Chinese_China",
            Language::ChineseTraditional => "Chinese_Taiwan",
        }
    }
}

pub(crate) fn template(language: Language, key: MessageKey) -> Option<&'static str> {
    use Language::*;
    use MessageKey::*;

    let text = match (language, key) {
        (Arabic, StartProcessing) => "🚀 بدء المعالجة: جاري تحميل {}...",
        (Arabic, ExtractedEntries) => "تم استخراج {0} مدخلات، منها {1} هي سجل Gemini.",
        (Arabic, ConvertingMarkdown) => "جاري التحويل إلى Markdown...",
        (Arabic, AppendedToFile) => "تمت إضافة سجلات الدردشة إلى الملف: {}",
        (Arabic, WrittenToFile) => "تم كتابة سجلات الدردشة إلى الملف: {}",
        (Arabic, ProcessingComplete) => "✅ اكتمل: تم حفظ السجل من {0} إلى {1} في إجمالي {2} ملفات.",
        (Arabic, ErrorOccurred) => "حدث خطأ: {}",
        (Bengali, StartProcessing) => "🚀 প্রক্রিয়াকরণ শুরু হচ্ছে: {} লোড হচ্ছে...",
        (Bengali, ExtractedEntries) => "{0} এন্ট্রি বের করা হয়েছে, যার মধ্যে {1} টি Gemini ইতিহাস।",
        (Bengali, ConvertingMarkdown) => "Markdown এ রূপান্তর করা হচ্ছে...",
        (Bengali, AppendedToFile) => "চ্যাট ইতিহাস ফাইলে যোগ করা হয়েছে: {}",
        (Bengali, WrittenToFile) => "চ্যাট ইতিহাস ফাইলে লেখা হয়েছে: {}",
        (Bengali, ProcessingComplete) => "✅ সম্পন্ন: {0} থেকে {1} পর্যন্ত ইতিহাস মোট {2} ফাইলে সংরক্ষণ করা হয়েছে।",
        (Bengali, ErrorOccurred) => "একটি ত্রুটি ঘটেছে: {}",
        (German, StartProcessing) => "🚀 Verarbeitung gestartet: Lade {}...",
        (German, ExtractedEntries) => "{0} Einträge extrahiert, davon sind {1} Gemini-Verlauf.",
        (German, ConvertingMarkdown) => "Konvertiere zu Markdown...",
        (German, AppendedToFile) => "Chatverläufe an Datei angehängt: {}",
        (German, WrittenToFile) => "Chatverläufe in Datei geschrieben: {}",
        (German, ProcessingComplete) => "✅ Abgeschlossen: Verlauf von {0} bis {1} in insgesamt {2} Dateien gespeichert.",
        (German, ErrorOccurred) => "Ein Fehler ist aufgetreten: {}",
        (English, StartProcessing) => "🚀 Starting processing: Loading {}...",
        (English, ExtractedEntries) => "Extracted {0} entries, of which {1} are Gemini history.",
        (English, ConvertingMarkdown) => "Converting to Markdown...",
        (English, AppendedToFile) => "Chat histories appended to file: {}",
        (English, WrittenToFile) => "Chat histories written to file: {}",
        (English, ProcessingComplete) => "✅ Completed: Saved history after {0} to {1} into a total of {2} files.",
        (English, ErrorOccurred) => "An error occurred: {}",
        (English, NoNewEntries) => "No new entries since {}. Nothing written.",
        (Spanish, StartProcessing) => "🚀 Iniciando procesamiento: Cargando {}...",
        (Spanish, ExtractedEntries) => "Se extrajeron {0} entradas, de las cuales {1} son historial de Gemini.",
        (Spanish, ConvertingMarkdown) => "Convirtiendo a Markdown...",
        (Spanish, AppendedToFile) => "Historiales de chat agregados al archivo: {}",
        (Spanish, WrittenToFile) => "Historiales de chat escritos en el archivo: {}",
        (Spanish, ProcessingComplete) => "✅ Completado: Historial guardado desde {0} hasta {1} en un total de {2} archivos.",
        (Spanish, ErrorOccurred) => "Ocurrió un error: {}",
        (Persian, StartProcessing) => "🚀 شروع پردازش: در حال بارگذاری {}...",
        (Persian, ExtractedEntries) => "{0} ورودی استخراج شد که {1} مورد از آنها تاریخچه Gemini است.",
        (Persian, ConvertingMarkdown) => "در حال تبدیل به Markdown...",
        (Persian, AppendedToFile) => "تاریخچه چت به فایل اضافه شد: {}",
        (Persian, WrittenToFile) => "تاریخچه چت در فایل نوشته شد: {}",
        (Persian, ProcessingComplete) => "✅ تکمیل شد: تاریخچه از {0} تا {1} در مجموع در {2} فایل ذخیره شد.",
        (Persian, ErrorOccurred) => "یک خطا رخ داد: {}",
        (French, StartProcessing) => "🚀 Démarrage du traitement : Chargement de {}...",
        (French, ExtractedEntries) => "{0} entrées extraites, dont {1} sont l'historique Gemini.",
        (French, ConvertingMarkdown) => "Conversion en Markdown...",
        (French, AppendedToFile) => "Historiques de chat ajoutés au fichier : {}",
        (French, WrittenToFile) => "Historiques de chat écrits dans le fichier : {}",
        (French, ProcessingComplete) => "✅ Terminé : Historique sauvegardé de {0} à {1} dans un total de {2} fichiers.",
        (French, ErrorOccurred) => "Une erreur est survenue : {}",
        (Hindi, StartProcessing) => "🚀 प्रसंस्करण शुरू हो रहा है: {} लोड हो रहा है...",
        (Hindi, ExtractedEntries) => "Ditemukan {0} entri, di mana {1} adalah riwayat Gemini.",
        (Hindi, ConvertingMarkdown) => "Mengonversi ke Markdown...",
        (Hindi, AppendedToFile) => "Riwayat obrolan ditambahkan ke file: {}",
        (Hindi, WrittenToFile) => "Riwayat obrolan ditulis ke file: {}",
        (Hindi, ProcessingComplete) => "✅ Selesai: Riwayat disimpan dari {0} hingga {1} dalam total {2} file.",
        (Hindi, ErrorOccurred) => "Terjadi kesalahan: {}",
        (Indonesian, StartProcessing) => "🚀 Memulai pemrosesan: Memuat {}...",
        (Indonesian, ExtractedEntries) => "Estratti {0} voci, di cui {1} sono cronologia di Gemini.",
        (Indonesian, ConvertingMarkdown) => "Conversione in Markdown...",
        (Indonesian, AppendedToFile) => "Cronologia chat aggiunta al file: {}",
        (Indonesian, WrittenToFile) => "Cronologia chat scritta nel file: {}",
        (Indonesian, ProcessingComplete) => "✅ Completato: Cronologia salvata da {0} a {1} in un totale di {2} file.",
        (Indonesian, ErrorOccurred) => "Si è verificato un errore: {}",
        (Japanese, StartProcessing) => "🚀 処理開始: {} を読み込み中...",
        (Japanese, ExtractedEntries) => "{0} 件抽出され、うち Gemini の履歴は {1} 件ありました。",
        (Japanese, ConvertingMarkdown) => "Markdown に変換中...",
        (Japanese, AppendedToFile) => "チャット履歴をファイルに追記しました: {}",
        (Japanese, WrittenToFile) => "チャット履歴をファイルに書き込みました: {}",
        (Japanese, ProcessingComplete) => "✅ 完了しました: {0} より後の {1} までの履歴を延べ {2} ファイルに分割保存しました。",
        (Japanese, ErrorOccurred) => "エラーが発生しました: {}",
        (Japanese, NoNewEntries) => "{} 以降の新しい履歴はありません。何も書き込みませんでした。",
        (Javanese, StartProcessing) => "🚀 Memulai pemrosesan: Memuat {}...",
        (Javanese, ExtractedEntries) => "Ditemukan {0} entri, di mana {1} adalah riwayat Gemini.",
        (Javanese, ConvertingMarkdown) => "Mengonversi ke Markdown...",
        (Javanese, AppendedToFile) => "Riwayat obrolan ditambahkan ke berkas: {}",
        (Javanese, WrittenToFile) => "Riwayat obrolan ditulis ke berkas: {}",
        (Javanese, ProcessingComplete) => "✅ Selesai: Riwayat disimpan dari {0} hingga {1} dalam total {2} berkas.",
        (Javanese, ErrorOccurred) => "Terjadi kesalahan: {}",
        (Korean, StartProcessing) => "🚀 처리 시작: {} 로드 중...",
        (Korean, ExtractedEntries) => "{0}개의 항목이 추출되었고, 그 중 {1}개는 Gemini 기록입니다.",
        (Korean, ConvertingMarkdown) => "Markdown으로 변환 중...",
        (Korean, AppendedToFile) => "채팅 기록이 파일에 추가되었습니다: {}",
        (Korean, WrittenToFile) => "채팅 기록이 파일에 작성되었습니다: {}",
        (Korean, ProcessingComplete) => "✅ 완료: {0}부터 {1}까지의 기록이 총 {2}개의 파일에 저장되었습니다.",
        (Korean, ErrorOccurred) => "오류가 발생했습니다: {}",
        (Marathi, StartProcessing) => "🚀 प्रक्रिया सुरू होत आहे: {} लोड होत आहे...",
        (Marathi, ExtractedEntries) => "{0} नोंदी काढल्या, ज्यापैकी {1} Gemini इतिहास आहे.",
        (Marathi, ConvertingMarkdown) => "Markdown मध्ये रूपांतरित करत आहे...",
        (Marathi, AppendedToFile) => "चॅट इतिहास फाइलमध्ये जोडला गेला: {}",
        (Marathi, WrittenToFile) => "चॅट इतिहास फाइलमध्ये लिहिला गेला: {}",
        (Marathi, ProcessingComplete) => "✅ पूर्ण झाले: इतिहास {0} पासून {1} पर्यंत एकूण {2} फाइल्समध्ये जतन केला गेला.",
        (Marathi, ErrorOccurred) => "एक त्रुटी आली आहे: {}",
        (Malay, StartProcessing) => "🚀 Memulakan pemprosesan: Memuat {}...",
        (Malay, ExtractedEntries) => "Diekstrak {0} entri, di mana {1} adalah sejarah Gemini.",
        (Malay, ConvertingMarkdown) => "Menukar kepada Markdown...",
        (Malay, AppendedToFile) => "Sejarah sembang ditambah ke fail: {}",
        (Malay, WrittenToFile) => "Sejarah sembang ditulis ke fail: {}",
        (Malay, ProcessingComplete) => "✅ Selesai: Sejarah disimpan dari {0} hingga {1} dalam jumlah {2} fail.",
        (Malay, ErrorOccurred) => "Ralat telah berlaku: {}",
        (Punjabi, StartProcessing) => "🚀 ਪ੍ਰਕਿਰਿਆ ਸ਼ੁਰੂ ਹੋ ਰਹੀ ਹੈ: {} ਲੋਡ ਹੋ ਰਿਹਾ ਹੈ...",
        (Punjabi, ExtractedEntries) => "{0} ਐਂਟਰੀਆਂ ਨਿਕਾਲੀਆਂ ਗਈਆਂ, ਜਿਨ੍ਹਾਂ ਵਿੱਚੋਂ {1} Gemini ਇਤਿਹਾਸ ਹੈ।",
        (Punjabi, ConvertingMarkdown) => "Markdown ਵਿੱਚ ਬਦਲ ਰਿਹਾ ਹੈ...",
        (Punjabi, AppendedToFile) => "ਚੈਟ ਇਤਿਹਾਸ ਫਾਈਲ ਵਿੱਚ ਸ਼ਾਮਲ ਕੀਤਾ ਗਿਆ: {}",
        (Punjabi, WrittenToFile) => "ਚੈਟ ਇਤਿਹਾਸ ਫਾਈਲ ਵਿੱਚ ਲਿਖਿਆ ਗਿਆ: {}",
        (Punjabi, ProcessingComplete) => "✅ ਮੁਕੰਮਲ: ਇਤਿਹਾਸ {0} ਤੋਂ {1} ਤੱਕ ਕੁੱਲ {2} ਫਾਈਲਾਂ ਵਿੱਚ ਸੁਰੱਖਿਅਤ ਕੀਤਾ ਗਿਆ।",
        (Punjabi, ErrorOccurred) => "ਇੱਕ ਤਰੁੱਟੀ ਆਈ: {}",
        (Portuguese, StartProcessing) => "🚀 Iniciando processamento: Carregando {}...",
        (Portuguese, ExtractedEntries) => "Extraídas {0} entradas, das quais {1} são histórico do Gemini.",
        (Portuguese, ConvertingMarkdown) => "Convertendo para Markdown...",
        (Portuguese, AppendedToFile) => "Históricos de chat adicionados ao arquivo: {}",
        (Portuguese, WrittenToFile) => "Históricos de chat escritos no arquivo: {}",
        (Portuguese, ProcessingComplete) => "✅ Concluído: Histórico salvo de {0} a {1} em um total de {2} arquivos.",
        (Portuguese, ErrorOccurred) => "Ocorreu um erro: {}",
        (Russian, StartProcessing) => "🚀 Начало обработки: Загрузка {}...",
        (Russian, ExtractedEntries) => "Извлечено {0} записей, из которых {1} относятся к истории Gemini.",
        (Russian, ConvertingMarkdown) => "Преобразование в Markdown...",
        (Russian, AppendedToFile) => "История чата добавлена в файл: {}",
        (Russian, WrittenToFile) => "История чата записана в файл: {}",
        (Russian, ProcessingComplete) => "✅ Завершено: История сохранена с {0} по {1} в общей сложности в {2} файлах.",
        (Russian, ErrorOccurred) => "Произошла ошибка: {}",
        (Swahili, StartProcessing) => "🚀 Kuanzia usindikaji: Inapakia {}...",
        (Swahili, ExtractedEntries) => "Imechota rekodi {0}, ambapo {1} ni historia ya Gemini.",
        (Swahili, ConvertingMarkdown) => "Inabadilisha kuwa Markdown...",
        (Swahili, AppendedToFile) => "Historia za mazungumzo zimeongezwa kwenye faili: {}",
        (Swahili, WrittenToFile) => "Historia za mazungumzo zimeandikwa kwenye faili: {}",
        (Swahili, ProcessingComplete) => "✅ Imekamilika: Historia imehifadhiwa kutoka {0} hadi {1} katika jumla ya faili {2}.",
        (Swahili, ErrorOccurred) => "Hitilafu imetokea: {}",
        (Tamil, StartProcessing) => "🚀 செயலாக்கம் தொடங்குகிறது: {} ஏற்றப்படுகிறது...",
        (Tamil, ExtractedEntries) => "à¸”à¸¶à¸‡à¸‚à¹‰à¸­à¸¡à¸¹à¸¥ {0} à¸£à¸²à¸¢à¸à¸²à¸£ à¸‹à¸¶à¹ˆà¸‡à¸¡à¸µà¸›à¸£à¸°à¸§à¸±à¸•à¸´à¸‚à¸­à¸‡ Gemini à¸ˆà¸³à¸™à¸§à¸™ {1} à¸£à¸²à¸¢à¸à¸²à¸£",
        (Tamil, ConvertingMarkdown) => "à¸à¸³à¸¥à¸±à¸‡à¹à¸›à¸¥à¸‡à¹€à¸›à¹‡à¸™ Markdown...",
        (Tamil, AppendedToFile) => "à¸›à¸£à¸°à¸§à¸±à¸•à¸´à¸à¸²à¸£à¹à¸Šà¸—à¸–à¸¹à¸à¹€à¸žà¸´à¹ˆà¸¡à¸¥à¸‡à¹ƒà¸™à¹„à¸Ÿà¸¥à¹Œ: {}",
        (Tamil, WrittenToFile) => "à¸›à¸£à¸°à¸§à¸±à¸•à¸´à¸à¸²à¸£à¹à¸Šà¸—à¸–à¸¹à¸à¹€à¸‚à¸µà¸¢à¸™à¸¥à¸‡à¹ƒà¸™à¹„à¸Ÿà¸¥à¹Œ: {}",
        (Tamil, ProcessingComplete) => "✅ à¹€à¸ªà¸£à¹‡à¸ˆà¸ªà¸´à¹‰à¸™: à¸šà¸±à¸™à¸—à¸¶à¸à¸›à¸£à¸°à¸§à¸±à¸•à¸´à¸ˆà¸²à¸ {0} à¸–à¸¶à¸‡ {1} à¸¥à¸‡à¹ƒà¸™à¹„à¸Ÿà¸¥à¹Œà¸—à¸±à¹‰à¸‡à¸«à¸¡à¸” {2} à¹„à¸Ÿà¸¥à¹Œ",
        (Tamil, ErrorOccurred) => "à¹€à¸à¸´à¸”à¸‚à¹‰à¸­à¸œà¸´à¸”à¸žà¸¥à¸²à¸”: {}",
        (Telugu, StartProcessing) => "🚀 ప్రాసెసింగ్ ప్రారంభం: {} లోడ్ అవుతోంది...",
        (Telugu, ExtractedEntries) => "{0} ఎంట్రీలు తీసుకోబడ్డాయి, వాటిలో {1} జెమిని చరిత్ర.",
        (Telugu, ConvertingMarkdown) => "Markdown కు మారుస్తోంది...",
        (Telugu, AppendedToFile) => "చాట్ చరిత్ర ఫైల్‌కు జోడించబడింది: {}",
        (Telugu, WrittenToFile) => "చాట్ చరిత్ర ఫైల్‌కు రాయబడింది: {}",
        (Telugu, ProcessingComplete) => "✅ పూర్తయింది: చరిత్ర {0} నుండి {1} వరకు మొత్తం {2} ఫైళ్ళలో సేవ్ చేయబడింది.",
        (Telugu, ErrorOccurred) => "లోపం సంభవించింది: {}",
        (Thai, StartProcessing) => "🚀 เริ่มการประมวลผล: กำลังโหลด {}...",
        (Thai, ExtractedEntries) => "ดึงข้อมูล {0} รายการ ซึ่งมีประวัติของ Gemini จำนวน {1} รายการ",
        (Thai, ConvertingMarkdown) => "กำลังแปลงเป็น Markdown...",
        (Thai, AppendedToFile) => "ประวัติการแชทถูกเพิ่มลงในไฟล์: {}",
        (Thai, WrittenToFile) => "ประวัติการแชทถูกเขียนลงในไฟล์: {}",
        (Thai, ProcessingComplete) => "✅ เสร็จสิ้น: บันทึกประวัติจาก {0} ถึง {1} ลงในไฟล์ทั้งหมด {2} ไฟล์",
        (Thai, ErrorOccurred) => "เกิดข้อผิดพลาด: {}",
        (Turkish, StartProcessing) => "🚀 İşleme başlıyor: {} yükleniyor...",
        (Turkish, ExtractedEntries) => "{0} giriş çıkarıldı, bunların {1} tanesi Gemini geçmişi.",
        (Turkish, ConvertingMarkdown) => "Markdown'a dönüştürülüyor...",
        (Turkish, AppendedToFile) => "Sohbet geçmişi dosyaya eklendi: {}",
        (Turkish, WrittenToFile) => "Sohbet geçmişi dosyaya yazıldı: {}",
        (Turkish, ProcessingComplete) => "✅ Tamamlandı: {0} ile {1} arasındaki geçmiş toplam {2} dosyaya kaydedildi.",
        (Turkish, ErrorOccurred) => "Bir hata oluştu: {}",
        (Ukrainian, StartProcessing) => "🚀 Початок обробки: Завантаження {}...",
        (Ukrainian, ExtractedEntries) => "Вилучено {0} записів, з яких {1} стосуються історії Gemini.",
        (Ukrainian, ConvertingMarkdown) => "Конвертація в Markdown...",
        (Ukrainian, AppendedToFile) => "Історія чату додана до файлу: {}",
        (Ukrainian, WrittenToFile) => "Історія чату записана у файл: {}",
        (Ukrainian, ProcessingComplete) => "✅ Завершено: Історія з {0} по {1} збережена усього в {2} файлах.",
        (Ukrainian, ErrorOccurred) => "Сталася помилка: {}",
        (Urdu, StartProcessing) => "🚀 پراسیسنگ شروع ہو رہی ہے: {} لوڈ ہو رہا ہے...",
        (Urdu, ExtractedEntries) => "{0} اندراجات نکالے گئے، جن میں سے {1} Gemini کی تاریخ ہے",
        (Urdu, ConvertingMarkdown) => "Markdown میں تبدیل کیا جا رہا ہے...",
        (Urdu, AppendedToFile) => "چیٹ کی تاریخ فائل میں شامل کر دی گئی ہے: {}",
        (Urdu, WrittenToFile) => "چیٹ کی تاریخ فائل میں لکھ دی گئی ہے: {}",
        (Urdu, ProcessingComplete) => "✅ مکمل ہو گیا: تاریخ {0} سے {1} تک کل {2} فائلوں میں محفوظ کر دی گئی ہے",
        (Urdu, ErrorOccurred) => "ایک خرابی پیش آئی: {}",
        (Vietnamese, StartProcessing) => "🚀 Bắt đầu xử lý: Đang tải {}...",
        (Vietnamese, ExtractedEntries) => "Đã trích xuất {0} mục, trong đó có {1} là lịch sử Gemini.",
        (Vietnamese, ConvertingMarkdown) => "Đang chuyển đổi sang Markdown...",
        (Vietnamese, AppendedToFile) => "Lịch sử trò chuyện đã được thêm vào tệp: {}",
        (Vietnamese, WrittenToFile) => "Lịch sử trò chuyện đã được ghi vào tệp: {}",
        (Vietnamese, ProcessingComplete) => "✅ Hoàn thành: Đã lưu lịch sử từ {0} đến {1} vào tổng cộng {2} tệp.",
        (Vietnamese, ErrorOccurred) => "Đã xảy ra lỗi: {}",
        (ChineseSimplified, StartProcessing) => "🚀 开始处理：正在加载 {}...",
        (ChineseSimplified, ExtractedEntries) => "提取了 {0} 条项目，其中 {1} 条是 Gemini 历史记录。",
        (ChineseSimplified, ConvertingMarkdown) => "正在转换为 Markdown...",
        (ChineseSimplified, AppendedToFile) => "聊天历史已追加到文件：{}",
        (ChineseSimplified, WrittenToFile) => "聊天历史已写入文件：{}",
        (ChineseSimplified, ProcessingComplete) => "✅ 完成：已将 {0} 到 {1} 之间的历史记录保存到共计 {2} 个文件中。",
        (ChineseSimplified, ErrorOccurred) => "发生错误：{}",
        (ChineseTraditional, StartProcessing) => "🚀 開始處理：正在載入 {}...",
        (ChineseTraditional, ExtractedEntries) => "擷取了 {0} 條項目，其中 {1} 條是 Gemini 歷史記錄。",
        (ChineseTraditional, ConvertingMarkdown) => "正在轉換為 Markdown...",
        (ChineseTraditional, AppendedToFile) => "聊天歷史已追加到檔案：{}",
        (ChineseTraditional, WrittenToFile) => "聊天歷史已寫入檔案：{}",
        (ChineseTraditional, ProcessingComplete) => "✅ 完成：已將 {0} 到 {1} 之間的歷史記錄儲存到共計 {2} 個檔案中。",
        (ChineseTraditional, ErrorOccurred) => "發生錯誤：{}",
        _ => return None,
    };
    Some(text)
}
