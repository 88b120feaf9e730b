//! The static dataset the catalog boots from: the published archive of the
//! faculty newspaper plus the current academic announcements.

use once_cell::sync::Lazy;

use utils_common::models::{Announcement, AnnouncementKind, Article, Category};

static ARTICLES: Lazy<Vec<Article>> = Lazy::new(|| {
    vec![
        Article {
            id: "dn-101".to_string(),
            title: "انطلاق الموسم العلمي الجديد بكلية الدعوة وأصول الدين".to_string(),
            excerpt: "افتتح عميد الكلية الموسم العلمي بمحاضرة عن مستقبل الدراسات الدعوية."
                .to_string(),
            content: "شهدت قاعة المحاضرات الكبرى صباح اليوم انطلاق الموسم العلمي الجديد، \
                      بحضور أعضاء هيئة التدريس وجمع من الطلبة. وأكد العميد في كلمته الافتتاحية \
                      على أهمية الربط بين التكوين الشرعي والمهارات البحثية الحديثة، معلناً عن \
                      سلسلة ندوات شهرية تستضيف باحثين من داخل الجامعة وخارجها.".to_string(),
            category: Category::News,
            author: "هيئة التحرير".to_string(),
            date: "2024-09-15".to_string(),
            image: "https://picsum.photos/id/1015/800/450".to_string(),
            tags: vec!["الموسم العلمي".to_string(), "ندوات".to_string()],
        },
        Article {
            id: "dn-102".to_string(),
            title: "مناهج التفسير بين الأصالة والمعاصرة".to_string(),
            excerpt: "قراءة في تطور مناهج المفسرين وأثرها على الدرس القرآني المعاصر.".to_string(),
            content: "تتناول هذه المقالة تطور مناهج التفسير منذ عصر التدوين إلى اليوم، \
                      وتناقش الإشكالات المنهجية التي تواجه الباحث المعاصر عند الجمع بين \
                      أدوات التحليل الحديثة وضوابط التفسير المأثورة، مع أمثلة تطبيقية من \
                      أبرز المدارس التفسيرية.".to_string(),
            category: Category::Essays,
            author: "د. أحمد الفيتوري".to_string(),
            date: "2024-08-28".to_string(),
            image: "https://picsum.photos/id/1031/800/450".to_string(),
            tags: vec!["تفسير".to_string(), "مناهج".to_string()],
        },
        Article {
            id: "dn-103".to_string(),
            title: "حوار مع رئيس قسم الدراسات العليا حول برامج الماجستير".to_string(),
            excerpt: "رئيس القسم يكشف عن خطة تطوير برامج الدراسات العليا للعام القادم."
                .to_string(),
            content: "في هذا الحوار يتحدث رئيس قسم الدراسات العليا عن مستجدات برامج \
                      الماجستير، وشروط القبول للعام الجامعي القادم، وخطة القسم لاستحداث \
                      مسار بحثي في الدراسات المقارنة، إضافة إلى الإجابة عن أكثر أسئلة \
                      الطلبة تكراراً حول التسجيل والإشراف.".to_string(),
            category: Category::Interviews,
            author: "أ. فاطمة بن عامر".to_string(),
            date: "2024-07-30".to_string(),
            image: "https://picsum.photos/id/1027/800/450".to_string(),
            tags: vec!["دراسات عليا".to_string(), "ماجستير".to_string()],
        },
        Article {
            id: "dn-104".to_string(),
            title: "من تراث زليتن العلمي: مكتبات المخطوطات".to_string(),
            excerpt: "جولة في أبرز خزائن المخطوطات بالمدينة وما تحويه من نوادر.".to_string(),
            content: "تزخر مدينة زليتن بعدد من خزائن المخطوطات التي حفظت نتاج قرون من \
                      التأليف في الفقه واللغة والسيرة. في هذا القسم الثقافي نستعرض أشهر \
                      هذه الخزائن، وجهود الرقمنة الجارية لصونها، ودور طلبة الكلية في \
                      فهرستها ضمن مشاريع التخرج.".to_string(),
            category: Category::Culture,
            author: "د. خالد المغربي".to_string(),
            date: "2024-06-18".to_string(),
            image: "https://picsum.photos/id/1040/800/450".to_string(),
            tags: vec!["تراث".to_string(), "مخطوطات".to_string(), "زليتن".to_string()],
        },
        Article {
            id: "dn-105".to_string(),
            title: "فتح باب التسجيل في دورة مهارات الخطابة".to_string(),
            excerpt: "الدورة مفتوحة لطلبة الكلية كافة والمقاعد محدودة.".to_string(),
            content: "يعلن مكتب النشاط الطلابي عن فتح باب التسجيل في دورة مهارات الخطابة \
                      والإلقاء، التي يقدمها نخبة من أساتذة الكلية على مدى أسبوعين. التسجيل \
                      عبر مكتب النشاط أو بالبريد الإلكتروني، والأولوية لأسبقية التسجيل."
                .to_string(),
            category: Category::Announcements,
            author: "مكتب النشاط الطلابي".to_string(),
            date: "2024-09-02".to_string(),
            image: "https://picsum.photos/id/1050/800/450".to_string(),
            tags: vec!["دورات".to_string(), "خطابة".to_string()],
        },
        Article {
            id: "dn-106".to_string(),
            title: "أثر الوقف العلمي في نهضة المؤسسات التعليمية".to_string(),
            excerpt: "دراسة تاريخية في نماذج الوقف التعليمي ودورها في استدامة العلم."
                .to_string(),
            content: "يتناول هذا البحث المختصر صور الوقف العلمي عبر التاريخ الإسلامي، \
                      من وقف الكتب والخزائن إلى وقف دور الإقراء، ويستخلص الدروس العملية \
                      لإحياء هذه السنة في دعم التعليم الجامعي المعاصر.".to_string(),
            category: Category::Essays,
            author: "د. أحمد الفيتوري".to_string(),
            date: "2024-05-11".to_string(),
            image: "https://picsum.photos/id/1062/800/450".to_string(),
            tags: vec!["وقف".to_string(), "تاريخ".to_string()],
        },
    ]
});

static ANNOUNCEMENTS: Lazy<Vec<Announcement>> = Lazy::new(|| {
    vec![
        Announcement {
            id: "ann-1".to_string(),
            title: "تأجيل امتحانات الدور الثاني إلى الأسبوع القادم".to_string(),
            date: "10 سبتمبر 2024".to_string(),
            kind: AnnouncementKind::Urgent,
        },
        Announcement {
            id: "ann-2".to_string(),
            title: "بدء استلام ملفات التسجيل للطلبة الجدد".to_string(),
            date: "8 سبتمبر 2024".to_string(),
            kind: AnnouncementKind::Normal,
        },
        Announcement {
            id: "ann-3".to_string(),
            title: "آخر موعد لتسليم أبحاث التخرج نهاية الشهر الجاري".to_string(),
            date: "5 سبتمبر 2024".to_string(),
            kind: AnnouncementKind::Urgent,
        },
        Announcement {
            id: "ann-4".to_string(),
            title: "محاضرة عامة: الذكاء الاصطناعي وأخلاقيات البحث الشرعي".to_string(),
            date: "1 سبتمبر 2024".to_string(),
            kind: AnnouncementKind::Normal,
        },
    ]
});

/// A fresh copy of the seed articles, newest first.
pub fn articles() -> Vec<Article> {
    ARTICLES.clone()
}

/// A fresh copy of the academic announcements.
pub fn announcements() -> Vec<Announcement> {
    ANNOUNCEMENTS.clone()
}

/// The urgent subset, in order - this feeds the breaking-news ticker.
pub fn urgent_announcements() -> Vec<Announcement> {
    ANNOUNCEMENTS
        .iter()
        .filter(|a| a.is_urgent())
        .cloned()
        .collect()
}
