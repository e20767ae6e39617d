// src/test_fixtures.rs
//! Trimmed registry pages shared by unit tests.

pub(crate) const PATENT_HTML: &str = r#"<html>
<head><meta charset="utf-8"><title>РОССИЙСКАЯ ФЕДЕРАЦИЯ. ПАТЕНТ НА ИЗОБРЕТЕНИЕ</title></head>
<body>
<table class="tp"><tr><td>
<p>(11) Номер патента: <a href="/fips_servl/fips_servlet?DB=RUPAT&amp;DocNumber=2384123" title="Ссылка на реестр (открывается в отдельном окне)">2384123</a></p>
<p>Дата регистрации:<br><b>15.03.2010</b></p>
<table class="status"><tr><td>Статус:</td><td class="StatusR">действует (последнее изменение статуса: 25.12.2019)</td></tr></table>
</td></tr></table>
<table id="bib"><tr><td>
<p>(21)(22) Заявка: <b><a href="/fips_servl/fips_servlet?DB=RUPATAP&amp;DocNumber=2008145123">2008145123/14</a>, 17.11.2008</b></p>
<p>(24) Дата начала отсчета срока действия патента:<br><b>17.11.2008</b></p>
<p>Приоритет(ы):</p>
<p>(22) Дата подачи заявки: <b>17.11.2008</b></p>
<p>(30) Конвенционный приоритет:<br><b>20.11.2007 US 60/989,123</b></p>
<p>(45) Опубликовано: <b><a href="/bull/2010/8">20.03.2010</a> Бюл. № 8</b></p>
</td><td>
<p>(72) Автор(ы):<br><b>Иванов Иван Иванович (RU),
    Петров Петр Петрович (RU)</b></p>
<p>(73) Патентообладатель(и):<br><b>Общество с ограниченной ответственностью &quot;Ромашка&quot; (RU)</b></p>
</td></tr></table>
<p id="B542"><b>(54) СПОСОБ ПОЛУЧЕНИЯ ВОДОРОДА</b></p>
<p class="TitAbs">(57) Реферат:</p>
<p>Изобретение относится к химической технологии.</p>
<p class="TitIzv"><b>PC4A - Государственная регистрация перехода исключительного права без заключения договора</b></p>
<p class="izv">Новый патентообладатель(и):<br><b>Акционерное общество &quot;Лютик&quot; (RU)</b></p>
<p class="izv">Дата публикации: <b><a href="/bull/2019/1">01.01.2019</a></b></p>
<p class="TitIzv"><b>MM4A - Досрочное прекращение действия патента из-за неуплаты в установленный срок пошлины за поддержание патента в силе</b></p>
<p class="izv">Дата прекращения действия патента: <b>18.11.2019</b></p>
<p class="izv">Дата публикации: <b><a href="/bull/2020/17">15.06.2020</a></b></p>
<p class="TitIzv"><b>TK4A - Поправки к публикациям сведений об изобретениях в бюллетенях</b></p>
<p class="izv">Напечатано: (73) Патентообладатель(и):<br><b>Общество с ограниченной ответственностью &quot;Ромахка&quot; (RU)</b></p>
<p class="izv">Следует читать: (73) Патентообладатель(и):<br><b>Общество с ограниченной ответственностью &quot;Ромашка&quot; (RU)</b></p>
<p class="izv">Номер и год публикации бюллетеня: <b>8-2010</b></p>
<p class="izv">Дата публикации: <b><a href="/bull/2010/13">10.05.2010</a></b></p>
<p class="TitIzv"><b>PD4A - Изменение наименования патентообладателя</b></p>
<p class="izv">Прежнее наименование патентообладателя:<br><b>Акционерное общество &quot;Лютик&quot; (RU)</b></p>
<p class="izv">Новое наименование патентообладателя:<br><b>Публичное акционерное общество &quot;Лютик&quot; (RU)</b></p>
<p class="izv">Дата публикации: <b><a href="/bull/2020/1">01.01.2020</a></b></p>
<p class="TitIzv"><b>TC4A - Поправки к публикациям сведений об изобретениях</b></p>
<p class="izv">Напечатано: (72) Автор(ы): Иванов Иван Иванович (RU)</p>
<p class="izv">Следует читать: (72) Автор(ы): Иванов Иван Иванович (RU), Петров Петр Петрович (RU)</p>
<p class="izv">Дата публикации: <b><a href="/bull/2010/19">12.07.2010</a></b></p>
</body>
</html>
"#;

pub(crate) const PROGRAM_HTML: &str = r#"<html>
<head><meta charset="utf-8"><title>СВИДЕТЕЛЬСТВО О ГОСУДАРСТВЕННОЙ РЕГИСТРАЦИИ ПРОГРАММЫ ДЛЯ ЭВМ</title></head>
<body>
<table id="bib"><tr><td>
<p>Номер регистрации (свидетельства):<br><b><a href="/fips_servl/fips_servlet?DB=EVM&amp;DocNumber=2010610123" title="Ссылка на реестр (открывается в отдельном окне)">2010610123</a></b></p>
<p>Дата регистрации:<br><b>18.01.2010</b></p>
<p>Номер и дата поступления заявки:<br><b>2010610001 11.01.2010</b></p>
<p>Дата публикации:<br><b><a href="/bull/2010/2">20.03.2010</a></b></p>
</td><td>
<p>Автор(ы):<br><b>Сидоров Сидор Сидорович (RU)</b></p>
<p>Правообладатель(и):<br><b>ООО &quot;Старый&quot; (RU)</b></p>
</td></tr></table>
<p class="TitAbs">Название программы для ЭВМ:<br><b>Программа учета складских остатков</b></p>
<p class="TitAbs">Реферат:<br>Программа предназначена для учета остатков на складе. Тип ЭВМ: IBM PC-совмест. ПК. ОС: Windows XP.</p>
<p>Язык программирования:<br><b>C++</b></p>
<p><b>Объем программы для ЭВМ:</b>
    15 Кб</p>
<p class="NameIzv">Изменения в сведения о правообладателе</p>
<p class="notice"><b>ООО &quot;Новый&quot; (RU)</b></p>
<p class="NameIzv">Исправление ошибки в сведениях о правообладателе. Напечатано / Следует читать:</p>
<p class="notice"><b>ООО &quot;Новы&quot; (RU)</b></p>
<p class="notice"><b>ООО &quot;Новый Плюс&quot; (RU)</b></p>
<p class="NameIzv">Изменение названия программы для ЭВМ</p>
<p class="notice"><b>Программа учета остатков 2.0</b></p>
</body>
</html>
"#;

pub(crate) const DATABASE_HTML: &str = r#"<html>
<head><meta charset="utf-8"><title>СВИДЕТЕЛЬСТВО О ГОСУДАРСТВЕННОЙ РЕГИСТРАЦИИ БАЗЫ ДАННЫХ</title></head>
<body>
<table id="bib"><tr><td>
<p>Номер регистрации (свидетельства):<br><b><a href="/fips_servl/fips_servlet?DB=DB&amp;DocNumber=2012620321" title="Ссылка на реестр (открывается в отдельном окне)">2012620321</a></b></p>
<p>Дата регистрации:<br><b>02.03.2012</b></p>
<p>Номер и дата поступления заявки:<br><b>2012620100 10.01.2012</b></p>
<p>Дата публикации:<br><b><a href="/bull/2012/1">20.03.2012</a></b></p>
</td><td>
<p>Автор(ы):<br><b>Кузнецов Алексей Петрович (RU)</b></p>
<p>Правообладатель(и):<br><b>ФГБУ &quot;Геоинформ&quot; (RU)</b></p>
</td></tr></table>
<p class="TitAbs">Название базы данных:<br><b>База данных месторождений</b></p>
<p class="TitAbs">Реферат:<br>База данных содержит сведения о месторождениях.</p>
<p>Вид и версия системы управления базой данных:<br><b>PostgreSQL 9.1</b></p>
<p>Тип реализующей ЭВМ:<br><b>IBM PC-совместимый ПК</b></p>
<p>Вид и версия операционной системы:<br><b>Linux</b></p>
<p><b>Объем базы данных:</b>
    120 Мб</p>
</body>
</html>
"#;

pub(crate) const TOPOLOGY_HTML: &str = r#"<html>
<head><meta charset="utf-8"><title>СВИДЕТЕЛЬСТВО О ГОСУДАРСТВЕННОЙ РЕГИСТРАЦИИ ТОПОЛОГИИ ИНТЕГРАЛЬНОЙ МИКРОСХЕМЫ</title></head>
<body>
<table id="bib"><tr><td>
<p>Номер регистрации (свидетельства):<br><b>2015630042</b></p>
<p>Дата регистрации:<br><b>12.05.2015</b></p>
<p>Номер и дата поступления заявки:<br><b>2015630030 03.03.2015</b></p>
<p>Дата публикации:<br><b>20.06.2015</b></p>
</td><td>
<p>Автор(ы):<br><b>Смирнов Олег Игоревич (RU)</b></p>
<p>Правообладатель(и):<br><b>АО &quot;Микрон&quot; (RU)</b></p>
</td></tr></table>
<p class="TitAbs">Название топологии:<br><b>Микросхема управления питанием</b></p>
<p class="TitAbs">Реферат:<br>Топология интегральной микросхемы контроллера питания.</p>
</body>
</html>
"#;

/// Patent page whose bibliography lacks parties and publication date; only a
/// correction notice mentions them.
pub(crate) const CORRECTION_ONLY_HTML: &str = r#"<html><body>
<p>(11) Номер патента: <b>2400001</b></p>
<p>Дата регистрации:<br><b>01.02.2010</b></p>
<p class="TitIzv"><b>TK4A - Поправки к публикациям сведений об изобретениях</b></p>
<p class="izv">Напечатано: (72) Автор(ы): Опечаткин (RU)</p>
<p class="izv">Напечатано: (73) Патентообладатель(и):<br><b>Опечатка (RU)</b></p>
<p class="izv">Следует читать: (73) Патентообладатель(и):<br><b>Верно (RU)</b></p>
<p class="izv">Дата публикации: <b>10.05.2010</b></p>
</body></html>
"#;

/// Placeholder the registry serves for unknown numbers, wrapped across lines.
pub(crate) const NOT_FOUND_HTML: &str = "<html><body>\n<div class=\"err\">Документ с данным\n    номером отсутствует</div>\n</body></html>\n";
